/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Network 结构一致性校验（加载后必跑）
 *
 * 除引用与归属自洽外，还要求每条连接恰好从第 i 层指向第 i+1 层，
 * 由此保证逐层一次前向传播即可求值且结果确定。
 */

use super::{Network, NetworkError};
use crate::nn::{NodeId, NodeKind};
use std::collections::HashMap;

impl Network {
    /// 校验网络的结构不变量
    ///
    /// 1. 层中引用的节点都存在，且每个节点恰好属于一层
    /// 2. 第一层即输入节点，最后一层即输出节点
    /// 3. 节点类型与所在层一致：输入节点只在第一层，输出节点只在最后一层
    /// 4. 每条连接的两端节点都存在，只从某层指向紧邻的下一层，
    ///    且该连接在源节点出边、目标节点入边中各恰好出现一次
    /// 5. 节点引用的连接都存在，且端点与该节点一致
    pub fn validate(&self) -> Result<(), NetworkError> {
        let layer_of = self.validate_layers()?;
        self.validate_io_layers()?;
        self.validate_node_kinds(&layer_of)?;
        self.validate_connections(&layer_of)?;
        self.validate_node_connections()
    }

    /// 返回每个节点所在层在 `layers` 中的下标
    fn validate_layers(&self) -> Result<HashMap<&NodeId, usize>, NetworkError> {
        let mut layer_of: HashMap<&NodeId, usize> = HashMap::new();
        for (index, layer) in self.layers.iter().enumerate() {
            for id in layer.nodes() {
                if !self.nodes.contains_key(id) {
                    return Err(NetworkError::NodeNotFound(id.clone()));
                }
                if layer_of.insert(id, index).is_some() {
                    return Err(NetworkError::InvalidTopology(format!(
                        "节点{id}重复出现在层中"
                    )));
                }
            }
        }
        if layer_of.len() != self.nodes.len() {
            return Err(NetworkError::InvalidTopology(format!(
                "{}个节点不属于任何层",
                self.nodes.len() - layer_of.len()
            )));
        }
        Ok(layer_of)
    }

    fn validate_io_layers(&self) -> Result<(), NetworkError> {
        let (Some(first), Some(last)) = (self.layers.first(), self.layers.last()) else {
            if self.input_nodes.is_empty() && self.output_nodes.is_empty() {
                return Ok(());
            }
            return Err(NetworkError::InvalidTopology(
                "网络没有任何层，却登记了输入/输出节点".to_string(),
            ));
        };
        if first.nodes() != self.input_nodes.as_slice() {
            return Err(NetworkError::InvalidTopology(
                "第一层必须恰好由输入节点组成".to_string(),
            ));
        }
        if last.nodes() != self.output_nodes.as_slice() {
            return Err(NetworkError::InvalidTopology(
                "最后一层必须恰好由输出节点组成".to_string(),
            ));
        }
        Ok(())
    }

    fn validate_node_kinds(
        &self,
        layer_of: &HashMap<&NodeId, usize>,
    ) -> Result<(), NetworkError> {
        let last = self.layers.len().saturating_sub(1);
        for (&id, &index) in layer_of {
            let expected = match index {
                0 => NodeKind::Input,
                i if i == last => NodeKind::Output,
                _ => NodeKind::Hidden,
            };
            let kind = self.node(id)?.kind();
            if kind != expected {
                return Err(NetworkError::InvalidTopology(format!(
                    "节点{id}位于第{}层，应为{expected}节点，实际为{kind}节点",
                    index + 1
                )));
            }
        }
        Ok(())
    }

    fn validate_connections(
        &self,
        layer_of: &HashMap<&NodeId, usize>,
    ) -> Result<(), NetworkError> {
        let layer_index = |id: &NodeId| {
            layer_of
                .get(id)
                .copied()
                .ok_or_else(|| NetworkError::NodeNotFound(id.clone()))
        };
        for (&connection_id, connection) in &self.connections {
            let source = self.node(connection.source())?;
            let target = self.node(connection.target())?;
            let source_layer = layer_index(source.id())?;
            let target_layer = layer_index(target.id())?;
            if target_layer != source_layer + 1 {
                return Err(NetworkError::InvalidTopology(format!(
                    "连接{connection_id}从第{}层指向第{}层，只允许指向紧邻的下一层",
                    source_layer + 1,
                    target_layer + 1
                )));
            }
            let out_count = source
                .out_connections()
                .iter()
                .filter(|&&id| id == connection_id)
                .count();
            let in_count = target
                .in_connections()
                .iter()
                .filter(|&&id| id == connection_id)
                .count();
            if out_count != 1 || in_count != 1 {
                return Err(NetworkError::InvalidTopology(format!(
                    "连接{connection_id}应在源节点出边和目标节点入边中各出现一次，实际为{out_count}次和{in_count}次"
                )));
            }
        }
        Ok(())
    }

    fn validate_node_connections(&self) -> Result<(), NetworkError> {
        for node in self.nodes.values() {
            for &connection_id in node.out_connections() {
                if self.connection(connection_id)?.source() != node.id() {
                    return Err(NetworkError::InvalidTopology(format!(
                        "节点{}的出边{connection_id}的源节点不是它自己",
                        node.id()
                    )));
                }
            }
            for &connection_id in node.in_connections() {
                if self.connection(connection_id)?.target() != node.id() {
                    return Err(NetworkError::InvalidTopology(format!(
                        "节点{}的入边{connection_id}的目标节点不是它自己",
                        node.id()
                    )));
                }
            }
        }
        Ok(())
    }
}

/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Network describe/summary/display_nodes 相关方法
 */

use super::{Network, NetworkError};
use crate::nn::descriptor::{
    ConnectionDescriptor, LayerDescriptor, NetworkDescriptor, NodeDescriptor,
};
use std::fmt::Write;

/// 层与层之间的分隔线
const LAYER_SEPARATOR: &str = "========================";

impl Network {
    // ========== 网络描述（describe）==========

    /// 导出网络的描述符（用于持久化）
    ///
    /// 节点按层序排列，连接按 id 升序排列，确保输出顺序一致
    pub fn describe(&self) -> NetworkDescriptor {
        let mut descriptor = NetworkDescriptor::new();

        let mut node_ids = self.node_ids_in_layer_order();
        let mut orphan_ids: Vec<_> = self
            .nodes
            .keys()
            .filter(|id| self.layer_index_of(id).is_none())
            .cloned()
            .collect();
        orphan_ids.sort();
        node_ids.extend(orphan_ids);

        descriptor.nodes = node_ids
            .iter()
            .filter_map(|id| self.nodes.get(id))
            .map(|node| NodeDescriptor {
                id: node.id().clone(),
                kind: node.kind(),
                bias: node.bias(),
                activation: node.activation(),
                in_connections: node.in_connections().to_vec(),
                out_connections: node.out_connections().to_vec(),
            })
            .collect();

        descriptor.connections = self
            .connection_ids()
            .into_iter()
            .filter_map(|id| self.connections.get(&id).map(|c| (id, c)))
            .map(|(id, connection)| ConnectionDescriptor {
                id,
                weight: connection.weight(),
                source: connection.source().clone(),
                target: connection.target().clone(),
            })
            .collect();

        descriptor.input_nodes = self.input_nodes.clone();
        descriptor.output_nodes = self.output_nodes.clone();
        descriptor.layers = self
            .layers
            .iter()
            .map(|layer| LayerDescriptor {
                number: layer.number(),
                nodes: layer.nodes().to_vec(),
            })
            .collect();

        descriptor
    }

    // ========== 诊断输出 ==========

    /// 逐层列出所有节点的诊断信息
    pub fn display_nodes(&self) -> Result<String, NetworkError> {
        let mut text = String::from(LAYER_SEPARATOR);
        for layer in &self.layers {
            let _ = write!(
                text,
                "\n{}\n{LAYER_SEPARATOR}",
                layer.list_nodes(&self.nodes, &self.connections)?
            );
        }
        Ok(text)
    }

    /// 一行式的网络摘要
    ///
    /// # 示例
    /// ```ignore
    /// println!("{}", network.summary());
    /// // 网络[节点=6, 连接=9, 层=[2, 3, 1]]
    /// ```
    pub fn summary(&self) -> String {
        let layer_sizes: Vec<usize> = self.layers.iter().map(|layer| layer.len()).collect();
        format!(
            "网络[节点={}, 连接={}, 层={:?}]",
            self.nodes_count(),
            self.connections_count(),
            layer_sizes
        )
    }
}

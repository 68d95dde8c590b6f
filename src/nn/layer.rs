/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 层：共享同一拓扑序号的节点分组，纯粹用于按序求值
 */

use super::{ConnectionMap, NetworkError, NodeId, NodeMap};
use std::fmt::Write;

/// 层内分隔线
const NODE_SEPARATOR: &str = "------------------------";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// 层号（从 1 开始，输入层为 1）
    number: usize,
    nodes: Vec<NodeId>,
}

impl Layer {
    pub const fn new(number: usize, nodes: Vec<NodeId>) -> Self {
        Self { number, nodes }
    }

    pub const fn number(&self) -> usize {
        self.number
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.nodes.contains(id)
    }

    /// 按存储顺序激活本层所有节点
    ///
    /// 同层节点之间没有依赖，顺序不影响结果；前一层必须已激活完毕
    pub fn activate_nodes(
        &self,
        nodes: &mut NodeMap,
        connections: &ConnectionMap,
    ) -> Result<(), NetworkError> {
        for id in &self.nodes {
            let activation = nodes
                .get(id)
                .ok_or_else(|| NetworkError::NodeNotFound(id.clone()))?
                .calc_activation(nodes, connections)?;
            nodes
                .get_mut(id)
                .ok_or_else(|| NetworkError::NodeNotFound(id.clone()))?
                .set_activation(activation);
        }
        Ok(())
    }

    /// 列出本层所有节点的诊断信息（只读）
    pub fn list_nodes(
        &self,
        nodes: &NodeMap,
        connections: &ConnectionMap,
    ) -> Result<String, NetworkError> {
        let mut text = format!("层号: {}", self.number);
        for id in &self.nodes {
            let node = nodes
                .get(id)
                .ok_or_else(|| NetworkError::NodeNotFound(id.clone()))?;
            let _ = write!(text, "\n{NODE_SEPARATOR}\n{}", node.describe(connections)?);
        }
        Ok(text)
    }
}

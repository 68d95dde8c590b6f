/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 网络描述符（Network Descriptor）
 *                 持久化用的中间表示：节点、连接、输入/输出节点与层都只以 id 互相引用，
 *                 同一条连接在两个节点的列表中以同一个连接 id 出现，往返后仍是同一条边
 */

use super::{ConnectionId, NodeId, NodeKind};
use serde::{Deserialize, Serialize};

/// 网络的可序列化描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkDescriptor {
    /// 格式版本（用于向后兼容）
    pub version: String,
    pub nodes: Vec<NodeDescriptor>,
    pub connections: Vec<ConnectionDescriptor>,
    pub input_nodes: Vec<NodeId>,
    pub output_nodes: Vec<NodeId>,
    pub layers: Vec<LayerDescriptor>,
}

/// 节点描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDescriptor {
    pub id: NodeId,
    pub kind: NodeKind,
    pub bias: f32,
    pub activation: f32,
    pub in_connections: Vec<ConnectionId>,
    pub out_connections: Vec<ConnectionId>,
}

/// 连接描述
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionDescriptor {
    pub id: ConnectionId,
    pub weight: f32,
    pub source: NodeId,
    pub target: NodeId,
}

/// 层描述
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerDescriptor {
    pub number: usize,
    pub nodes: Vec<NodeId>,
}

impl NetworkDescriptor {
    /// 创建空的网络描述符
    pub fn new() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            nodes: Vec::new(),
            connections: Vec::new(),
            input_nodes: Vec::new(),
            output_nodes: Vec::new(),
            layers: Vec::new(),
        }
    }

    /// 转换为 JSON 字符串
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 从 JSON 字符串解析
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// 转换为紧凑的二进制格式
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// 从二进制格式解析
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

impl Default for NetworkDescriptor {
    fn default() -> Self {
        Self::new()
    }
}

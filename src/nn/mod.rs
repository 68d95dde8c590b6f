/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 负责标量前馈网络（feedforward network）的构建、求值与突变
 */

pub mod activation;
mod config;
mod connection;
mod descriptor;
pub mod init;
mod layer;
mod network;
mod node;

pub use config::{MutationConfig, MutationScope, NetworkConfig, NetworkShape};
pub use connection::{Connection, ConnectionId};
pub use descriptor::{ConnectionDescriptor, LayerDescriptor, NetworkDescriptor, NodeDescriptor};
pub use layer::Layer;
pub use network::{ModelFormat, MutationRecord, Network, NetworkError};
pub use node::{INPUT_ACTIVATION, MutationTarget, Node, NodeId, NodeKind};

use std::collections::HashMap;

/// 网络的节点表：节点 id -> 节点
pub type NodeMap = HashMap<NodeId, Node>;
/// 网络的连接表：连接 id -> 连接
pub type ConnectionMap = HashMap<ConnectionId, Connection>;

#[cfg(test)]
mod tests;

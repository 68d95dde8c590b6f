/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 标量节点：持有偏置、激活值以及出入连接的 id，负责激活与突变算法
 */

use super::activation::leaky_relu;
use super::init::init_weight_or_bias;
use super::{ConnectionId, ConnectionMap, NetworkError, NodeMap};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

/// 输入节点在生成时被预置的激活值
pub const INPUT_ACTIVATION: f32 = 1.0;

/// 节点 id：进程内随机生成的非负整数字符串
///
/// 非加密、不保证全局唯一；同一网络内的冲突由 `Network` 在登记时重新抽取
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(String);

impl NodeId {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..i32::MAX).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 节点在网络中的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Input,
    Hidden,
    Output,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind_name = match self {
            Self::Input => "输入",
            Self::Hidden => "隐藏",
            Self::Output => "输出",
        };
        write!(f, "{}", kind_name)
    }
}

/// 单次节点突变选中的目标
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationTarget {
    Bias,
    Weight(ConnectionId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    id: NodeId,
    kind: NodeKind,
    bias: f32,
    activation: f32,
    out_connections: Vec<ConnectionId>,
    in_connections: Vec<ConnectionId>,
}

impl Node {
    /// 创建一个新节点：随机 id，`bias` 为 `None` 或 0 时按初始化策略抽取
    pub fn new<R: Rng + ?Sized>(kind: NodeKind, bias: Option<f32>, rng: &mut R) -> Self {
        let id = NodeId::random(rng);
        let bias = init_weight_or_bias(bias, rng);
        Self::with_id(id, kind, bias)
    }

    /// 以确定的 id 和偏置创建节点（输入节点的激活值预置为 `INPUT_ACTIVATION`）
    pub fn with_id(id: NodeId, kind: NodeKind, bias: f32) -> Self {
        let activation = match kind {
            NodeKind::Input => INPUT_ACTIVATION,
            NodeKind::Hidden | NodeKind::Output => 0.0,
        };
        Self {
            id,
            kind,
            bias,
            activation,
            out_connections: Vec::new(),
            in_connections: Vec::new(),
        }
    }

    /// 从持久化状态完整恢复节点
    pub(in crate::nn) fn restore(
        id: NodeId,
        kind: NodeKind,
        bias: f32,
        activation: f32,
        in_connections: Vec<ConnectionId>,
        out_connections: Vec<ConnectionId>,
    ) -> Self {
        Self {
            id,
            kind,
            bias,
            activation,
            out_connections,
            in_connections,
        }
    }

    // ========== 基础访问器 ==========

    pub const fn id(&self) -> &NodeId {
        &self.id
    }

    pub const fn kind(&self) -> NodeKind {
        self.kind
    }

    pub const fn bias(&self) -> f32 {
        self.bias
    }

    pub const fn activation(&self) -> f32 {
        self.activation
    }

    pub fn out_connections(&self) -> &[ConnectionId] {
        &self.out_connections
    }

    pub fn in_connections(&self) -> &[ConnectionId] {
        &self.in_connections
    }

    pub(in crate::nn) fn set_bias(&mut self, bias: f32) {
        self.bias = bias;
    }

    pub(in crate::nn) fn set_activation(&mut self, activation: f32) {
        self.activation = activation;
    }

    pub(in crate::nn) fn attach_out_connection(&mut self, connection_id: ConnectionId) {
        self.out_connections.push(connection_id);
    }

    pub(in crate::nn) fn attach_in_connection(&mut self, connection_id: ConnectionId) {
        self.in_connections.push(connection_id);
    }

    // ========== 激活 ==========

    /// 根据入边计算新的激活值（不写回）
    ///
    /// activation = leaky_relu(Σ weight * 源节点激活值 + bias)
    ///
    /// 要求所有源节点在本轮前向传播中已先被激活，这由逐层按序激活保证。
    /// 查表失败直接报错，而不是当作 0 参与求和。
    pub fn calc_activation(
        &self,
        nodes: &NodeMap,
        connections: &ConnectionMap,
    ) -> Result<f32, NetworkError> {
        let mut weighted_sum = 0.0f32;
        for connection_id in &self.in_connections {
            let connection = connections
                .get(connection_id)
                .ok_or(NetworkError::ConnectionNotFound(*connection_id))?;
            let source = nodes
                .get(connection.source())
                .ok_or_else(|| NetworkError::NodeNotFound(connection.source().clone()))?;
            weighted_sum += connection.weight() * source.activation;
        }
        Ok(leaky_relu(weighted_sum + self.bias))
    }

    // ========== 突变 ==========

    /// 选择本次突变的目标：1/2 概率改偏置，否则均匀选一条出边改权重
    ///
    /// 选中权重分支但没有出边时返回 `EmptyConnectionSet`
    pub fn choose_mutation<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<MutationTarget, NetworkError> {
        if rng.gen_range(0..2) == 0 {
            return Ok(MutationTarget::Bias);
        }
        if self.out_connections.is_empty() {
            return Err(NetworkError::EmptyConnectionSet(self.id.clone()));
        }
        let index = rng.gen_range(0..self.out_connections.len());
        Ok(MutationTarget::Weight(self.out_connections[index]))
    }

    // ========== 显示 ==========

    /// 节点的多行诊断信息（连接需要到连接表中查详情）
    pub fn describe(&self, connections: &ConnectionMap) -> Result<String, NetworkError> {
        let mut text = String::new();
        let _ = writeln!(text, "Id: {}（{}节点）", self.id, self.kind);
        let _ = writeln!(text, "偏置: {}", self.bias);
        let _ = writeln!(text, "入边:");
        for connection_id in &self.in_connections {
            let connection = connections
                .get(connection_id)
                .ok_or(NetworkError::ConnectionNotFound(*connection_id))?;
            let _ = writeln!(text, "  {connection}");
        }
        let _ = writeln!(text, "出边:");
        for connection_id in &self.out_connections {
            let connection = connections
                .get(connection_id)
                .ok_or(NetworkError::ConnectionNotFound(*connection_id))?;
            let _ = writeln!(text, "  {connection}");
        }
        let _ = write!(text, "激活值: {}", self.activation);
        Ok(text)
    }
}

/// 单行摘要；连接只列出 id，需要权重与端点时用 `describe`
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |ids: &[ConnectionId]| {
            ids.iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        };
        write!(
            f,
            "节点{}（{}）：偏置={}，激活值={}，入边=[{}]，出边=[{}]",
            self.id,
            self.kind,
            self.bias,
            self.activation,
            join(&self.in_connections),
            join(&self.out_connections)
        )
    }
}

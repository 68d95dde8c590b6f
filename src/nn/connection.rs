/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 连接（带权有向边）
 *
 * 连接只通过 id 引用两端节点，并不拥有它们；
 * 连接本身集中存放在 Network 的连接表中，节点只保存连接 id。
 */

use super::NodeId;
use super::init::init_weight_or_bias;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 连接在网络连接表中的 id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(pub u64);

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    source: NodeId,
    target: NodeId,
    weight: f32,
}

impl Connection {
    /// 创建连接；`weight` 为 `None` 或恰为 0 时按初始化策略抽取新权重
    pub fn new<R: Rng + ?Sized>(
        source: NodeId,
        target: NodeId,
        weight: Option<f32>,
        rng: &mut R,
    ) -> Self {
        Self {
            source,
            target,
            weight: init_weight_or_bias(weight, rng),
        }
    }

    /// 以确定的权重重建连接（用于加载）
    pub(in crate::nn) fn with_weight(source: NodeId, target: NodeId, weight: f32) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    pub const fn source(&self) -> &NodeId {
        &self.source
    }

    pub const fn target(&self) -> &NodeId {
        &self.target
    }

    pub const fn weight(&self) -> f32 {
        self.weight
    }

    pub(in crate::nn) fn set_weight(&mut self, weight: f32) {
        self.weight = weight;
    }
}

impl fmt::Display for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "权重 {}，从 {} 到 {}",
            self.weight, self.source, self.target
        )
    }
}

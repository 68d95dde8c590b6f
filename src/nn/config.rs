/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 网络配置：拓扑形状 + 网络级突变策略 + 随机种子
 *
 * 所有字段都有默认值，JSON 中缺省的字段按默认值补齐：
 * ```json
 * {
 *   "shape": { "input_count": 2, "hidden_layer_count": 3, "nodes_per_hidden_layer": 4, "output_count": 2 },
 *   "mutation": { "scope": { "rate": 0.2 } },
 *   "seed": 42
 * }
 * ```
 */

use super::NetworkError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 生成网络所用的拓扑形状
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkShape {
    pub input_count: usize,
    pub hidden_layer_count: usize,
    pub nodes_per_hidden_layer: usize,
    pub output_count: usize,
}

impl NetworkShape {
    pub const fn new(
        input_count: usize,
        hidden_layer_count: usize,
        nodes_per_hidden_layer: usize,
        output_count: usize,
    ) -> Self {
        Self {
            input_count,
            hidden_layer_count,
            nodes_per_hidden_layer,
            output_count,
        }
    }

    /// 层数 = 输入层 + 隐藏层 + 输出层
    pub const fn layers_count(&self) -> usize {
        self.hidden_layer_count + 2
    }

    pub const fn nodes_count(&self) -> usize {
        self.input_count + self.hidden_layer_count * self.nodes_per_hidden_layer + self.output_count
    }

    /// 相邻层之间全连接时的总边数
    pub const fn connections_count(&self) -> usize {
        if self.hidden_layer_count == 0 {
            return self.input_count * self.output_count;
        }
        let hidden = self.nodes_per_hidden_layer;
        self.input_count * hidden
            + (self.hidden_layer_count - 1) * hidden * hidden
            + hidden * self.output_count
    }
}

impl Default for NetworkShape {
    fn default() -> Self {
        Self::new(2, 3, 4, 2)
    }
}

/// 网络级突变的作用范围
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MutationScope {
    /// 按层序从所有节点中均匀选 1 个节点突变（每次调用恰好改 1 个值）
    #[default]
    SingleNode,
    /// 按层序对每个节点各突变一次
    EveryNode,
    /// 每个节点以给定概率独立突变，概率须在 [0, 1] 内
    Rate(f64),
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MutationConfig {
    pub scope: MutationScope,
}

impl MutationConfig {
    pub const fn new(scope: MutationScope) -> Self {
        Self { scope }
    }

    pub fn validate(&self) -> Result<(), NetworkError> {
        if let MutationScope::Rate(rate) = self.scope {
            if !(0.0..=1.0).contains(&rate) {
                return Err(NetworkError::InvalidOperation(format!(
                    "突变概率须在[0, 1]内，但得到: {}",
                    rate
                )));
            }
        }
        Ok(())
    }
}

/// 完整的网络配置
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub shape: NetworkShape,
    pub mutation: MutationConfig,
    /// None 表示使用系统熵（非确定性）
    pub seed: Option<u64>,
}

impl NetworkConfig {
    pub fn from_json(json: &str) -> Result<Self, NetworkError> {
        let config: Self = serde_json::from_str(json)?;
        config.mutation.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, NetworkError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&json)
    }
}

/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Network 模型 I/O（save_model/load_model）
 *
 * 职责：整张网络（拓扑 + 权重/偏置/激活值）的保存与加载
 * 依赖：describe() 导出描述符；加载时从描述符重建并跑一遍 validate()
 *
 * 格式按扩展名区分：
 * - `.bin`：bincode 紧凑二进制
 * - 其它：可读的 JSON
 */

use super::{Network, NetworkError};
use crate::nn::descriptor::NetworkDescriptor;
use crate::nn::{Connection, Layer, Node};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::Path;

/// 模型文件格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelFormat {
    /// JSON 格式（默认）
    #[default]
    Json,
    /// bincode 二进制格式
    Bincode,
}

impl ModelFormat {
    /// 获取文件扩展名（不含点号）
    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Bincode => "bin",
        }
    }

    /// 根据路径扩展名推断格式，未知扩展名按 JSON 处理
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .as_deref()
        {
            Some("bin") => Self::Bincode,
            _ => Self::Json,
        }
    }
}

impl Network {
    /// 保存完整网络
    ///
    /// # 示例
    /// ```ignore
    /// network.save_model("network.json")?; // 可读 JSON
    /// network.save_model("network.bin")?;  // 紧凑二进制
    /// ```
    pub fn save_model<P: AsRef<Path>>(&self, path: P) -> Result<(), NetworkError> {
        let path = path.as_ref();
        let descriptor = self.describe();
        match ModelFormat::from_path(path) {
            ModelFormat::Json => std::fs::write(path, descriptor.to_json()?)?,
            ModelFormat::Bincode => std::fs::write(path, descriptor.to_bytes()?)?,
        }
        log::info!("网络已保存到{}：{}", path.display(), self.summary());
        Ok(())
    }

    /// 加载完整网络（重建后会校验结构一致性）
    ///
    /// 加载得到的网络使用系统熵作为随机源；需要可复现时再调用 `set_seed`
    pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Self, NetworkError> {
        let path = path.as_ref();
        let descriptor = match ModelFormat::from_path(path) {
            ModelFormat::Json => NetworkDescriptor::from_json(&std::fs::read_to_string(path)?)?,
            ModelFormat::Bincode => NetworkDescriptor::from_bytes(&std::fs::read(path)?)?,
        };
        let network = Self::from_descriptor(descriptor)?;
        log::info!("已从{}加载网络：{}", path.display(), network.summary());
        Ok(network)
    }

    /// 加载网络；文件缺失、损坏或结构不一致时退回一个全新的空网络，而不是让进程失败
    pub fn load_model_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        Self::load_model(path).unwrap_or_else(|e| {
            log::warn!("加载网络{}失败（{e}），改用空网络", path.display());
            Self::new()
        })
    }

    /// 从描述符重建网络
    pub fn from_descriptor(descriptor: NetworkDescriptor) -> Result<Self, NetworkError> {
        let mut network = Self::with_rng(StdRng::from_entropy());

        for node in descriptor.nodes {
            let id = node.id.clone();
            let restored = Node::restore(
                node.id,
                node.kind,
                node.bias,
                node.activation,
                node.in_connections,
                node.out_connections,
            );
            if network.nodes.insert(id.clone(), restored).is_some() {
                return Err(NetworkError::InvalidTopology(format!("节点{id}重复")));
            }
        }

        for connection in descriptor.connections {
            let id = connection.id;
            let restored =
                Connection::with_weight(connection.source, connection.target, connection.weight);
            if network.connections.insert(id, restored).is_some() {
                return Err(NetworkError::InvalidTopology(format!("连接{id}重复")));
            }
            network.next_connection_id = network.next_connection_id.max(id.0 + 1);
        }

        network.input_nodes = descriptor.input_nodes;
        network.output_nodes = descriptor.output_nodes;
        network.layers = descriptor
            .layers
            .into_iter()
            .map(|layer| Layer::new(layer.number, layer.nodes))
            .collect();

        network.validate()?;
        Ok(network)
    }
}

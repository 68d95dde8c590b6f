/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Network 模块的错误类型
 */

use super::super::{ConnectionId, NodeId};
use thiserror::Error;

/// Network 操作错误类型
#[derive(Debug, Error)]
pub enum NetworkError {
    // ========== 结构错误（惰性发现：激活/校验时才查表） ==========
    /// 连接或层引用的节点 id 不在网络的节点表中
    #[error("节点{0}不存在于网络中")]
    NodeNotFound(NodeId),
    /// 节点引用的连接 id 不在网络的连接表中
    #[error("连接{0}不存在于网络中")]
    ConnectionNotFound(ConnectionId),
    /// 层归属、输入/输出层或连接两端登记不一致
    #[error("网络拓扑不一致：{0}")]
    InvalidTopology(String),

    // ========== 突变 ==========
    /// 选中了权重突变分支，但节点没有任何出边
    #[error("节点{0}没有出边，无法突变权重")]
    EmptyConnectionSet(NodeId),

    // ========== 持久化 ==========
    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON（反）序列化失败: {0}")]
    Json(#[from] serde_json::Error),
    #[error("二进制（反）序列化失败: {0}")]
    Bincode(#[from] bincode::Error),

    /// API 使用不当（如向非空网络再次生成）
    #[error("{0}")]
    InvalidOperation(String),
}

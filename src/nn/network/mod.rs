/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Network 模块：持有所有节点、连接与层
 *
 * 各 impl 块分散在子模块中：
 * - core.rs: 创建、访问器、拓扑生成
 * - forward.rs: 前向传播 + 输出/适应度
 * - evolution.rs: 节点级/网络级突变
 * - validate.rs: 结构一致性校验
 * - describe.rs: 描述符导出 + 诊断输出
 * - model_io.rs: save_model/load_model
 */

mod core;
mod describe;
mod error;
mod evolution;
mod forward;
mod model_io;
mod validate;

pub use error::NetworkError;
pub use evolution::MutationRecord;
pub use model_io::ModelFormat;

use super::{ConnectionMap, Layer, MutationConfig, NodeId, NodeMap};
use rand::rngs::StdRng;

/// 网络的完整定义
///
/// 节点与连接都集中存放在网络的表中（arena），彼此只以 id 引用：
/// 节点记录出入连接的 id，连接记录两端节点的 id。
/// 同一条连接只存一份，因而在两端节点之间天然共享。
#[derive(Debug)]
pub struct Network {
    pub(in crate::nn) nodes: NodeMap,
    pub(in crate::nn) connections: ConnectionMap,
    pub(in crate::nn) input_nodes: Vec<NodeId>,
    pub(in crate::nn) output_nodes: Vec<NodeId>,
    /// 按拓扑序排列：第一层为输入层，最后一层为输出层
    pub(in crate::nn) layers: Vec<Layer>,
    pub(super) next_connection_id: u64,
    pub(in crate::nn) mutation: MutationConfig,
    /// 网络级随机数生成器（节点 id、权重/偏置初始化、突变选择都从这里取）
    pub(in crate::nn) rng: StdRng,
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

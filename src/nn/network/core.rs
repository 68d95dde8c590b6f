/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Network 创建、基础访问器与拓扑生成
 */

use super::{Network, NetworkError};
use crate::nn::{
    Connection, ConnectionId, Layer, MutationConfig, NetworkConfig, NetworkShape, Node, NodeId,
    NodeKind,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashMap;

impl Network {
    // ========== 创建 ==========

    /// 创建空网络（随机源取自系统熵，非确定性）
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// 创建一个带固定种子的空网络（确保可重复性）
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub(in crate::nn) fn with_rng(rng: StdRng) -> Self {
        Self {
            nodes: HashMap::new(),
            connections: HashMap::new(),
            input_nodes: Vec::new(),
            output_nodes: Vec::new(),
            layers: Vec::new(),
            next_connection_id: 0,
            mutation: MutationConfig::default(),
            rng,
        }
    }

    /// 按配置创建并生成网络
    pub fn from_config(config: &NetworkConfig) -> Result<Self, NetworkError> {
        let mut network = config.seed.map_or_else(Self::new, Self::with_seed);
        network.set_mutation_config(config.mutation)?;
        network.generate(config.shape)?;
        Ok(network)
    }

    // ========== 配置 ==========

    /// 设置/重置网络的随机种子
    pub fn set_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub const fn mutation_config(&self) -> &MutationConfig {
        &self.mutation
    }

    pub fn set_mutation_config(&mut self, config: MutationConfig) -> Result<(), NetworkError> {
        config.validate()?;
        self.mutation = config;
        Ok(())
    }

    // ========== 基础访问器 ==========

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.layers.is_empty()
    }

    pub fn nodes_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn connections_count(&self) -> usize {
        self.connections.len()
    }

    pub fn node(&self, id: &NodeId) -> Result<&Node, NetworkError> {
        self.nodes
            .get(id)
            .ok_or_else(|| NetworkError::NodeNotFound(id.clone()))
    }

    pub fn connection(&self, id: ConnectionId) -> Result<&Connection, NetworkError> {
        self.connections
            .get(&id)
            .ok_or(NetworkError::ConnectionNotFound(id))
    }

    /// 所有连接 id（升序，即创建顺序）
    pub fn connection_ids(&self) -> Vec<ConnectionId> {
        let mut ids: Vec<_> = self.connections.keys().copied().collect();
        ids.sort();
        ids
    }

    pub fn input_nodes(&self) -> &[NodeId] {
        &self.input_nodes
    }

    pub fn output_nodes(&self) -> &[NodeId] {
        &self.output_nodes
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// 节点所在层在 `layers` 中的下标
    pub fn layer_index_of(&self, id: &NodeId) -> Option<usize> {
        self.layers.iter().position(|layer| layer.contains(id))
    }

    /// 按层序展开的全部节点 id
    pub fn node_ids_in_layer_order(&self) -> Vec<NodeId> {
        self.layers
            .iter()
            .flat_map(|layer| layer.nodes().iter().cloned())
            .collect()
    }

    // ========== 拓扑生成 ==========

    /// 生成分层全连接的前馈网络
    ///
    /// 输入层 → `hidden_layer_count` 个隐藏层 → 输出层，
    /// 只在相邻层之间连边（前一层每个节点连到后一层每个节点），因此天然无环
    pub fn generate(&mut self, shape: NetworkShape) -> Result<(), NetworkError> {
        if !self.is_empty() {
            return Err(NetworkError::InvalidOperation(
                "网络非空，无法再次生成".to_string(),
            ));
        }

        // 1. 输入层
        for _ in 0..shape.input_count {
            let id = self.add_node(NodeKind::Input);
            self.input_nodes.push(id);
        }
        self.layers.push(Layer::new(1, self.input_nodes.clone()));

        // 2. 隐藏层
        for _ in 0..shape.hidden_layer_count {
            let node_ids = self.generate_layer(shape.nodes_per_hidden_layer, NodeKind::Hidden)?;
            self.layers.push(Layer::new(self.layers.len() + 1, node_ids));
        }

        // 3. 输出层
        let output_ids = self.generate_layer(shape.output_count, NodeKind::Output)?;
        self.output_nodes = output_ids.clone();
        self.layers.push(Layer::new(self.layers.len() + 1, output_ids));

        log::info!(
            "生成网络：{}个节点，{}条连接，{}层",
            self.nodes_count(),
            self.connections_count(),
            self.layers.len()
        );
        Ok(())
    }

    /// 连接两个已登记的节点：同一条连接的 id 同时记入源节点的出边和目标节点的入边
    ///
    /// 不检查重复边或反向边；求值算法假定网络是分层 DAG
    pub fn connect(
        &mut self,
        source: &NodeId,
        target: &NodeId,
    ) -> Result<ConnectionId, NetworkError> {
        for id in [source, target] {
            if !self.nodes.contains_key(id) {
                return Err(NetworkError::NodeNotFound(id.clone()));
            }
        }

        let connection = Connection::new(source.clone(), target.clone(), None, &mut self.rng);
        let connection_id = self.generate_valid_connection_id();
        self.connections.insert(connection_id, connection);

        self.nodes
            .get_mut(source)
            .ok_or_else(|| NetworkError::NodeNotFound(source.clone()))?
            .attach_out_connection(connection_id);
        self.nodes
            .get_mut(target)
            .ok_or_else(|| NetworkError::NodeNotFound(target.clone()))?
            .attach_in_connection(connection_id);

        Ok(connection_id)
    }

    /// 新建 `count` 个节点，并从当前最后一层的每个节点连向每个新节点
    fn generate_layer(&mut self, count: usize, kind: NodeKind) -> Result<Vec<NodeId>, NetworkError> {
        let previous: Vec<NodeId> = self
            .layers
            .last()
            .map(|layer| layer.nodes().to_vec())
            .unwrap_or_default();

        let mut node_ids = Vec::with_capacity(count);
        for _ in 0..count {
            let id = self.add_node(kind);
            for source in &previous {
                self.connect(source, &id)?;
            }
            node_ids.push(id);
        }
        Ok(node_ids)
    }

    /// 创建并登记节点；随机 id 与已有节点冲突时重新抽取
    fn add_node(&mut self, kind: NodeKind) -> NodeId {
        let mut node = Node::new(kind, None, &mut self.rng);
        while self.nodes.contains_key(node.id()) {
            node = Node::new(kind, None, &mut self.rng);
        }
        let id = node.id().clone();
        self.nodes.insert(id.clone(), node);
        id
    }

    fn generate_valid_connection_id(&mut self) -> ConnectionId {
        let id = ConnectionId(self.next_connection_id);
        self.next_connection_id += 1;
        id
    }
}

/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Network 突变 API（只改权重/偏置的取值，从不增删节点或连接）
 */

use super::{Network, NetworkError};
use crate::nn::init::draw_weight_or_bias;
use crate::nn::{MutationScope, MutationTarget, NodeId};
use rand::Rng;

/// 一次已生效的突变
#[derive(Debug, Clone, PartialEq)]
pub struct MutationRecord {
    pub node: NodeId,
    pub target: MutationTarget,
    pub old_value: f32,
    pub new_value: f32,
}

impl Network {
    // ========== 节点级 ==========

    /// 对单个节点做一次突变：要么改它的偏置，要么改它的某条出边的权重
    ///
    /// 选中权重分支而节点没有出边时返回 `EmptyConnectionSet`，网络保持不变
    pub fn mutate_node(&mut self, id: &NodeId) -> Result<MutationRecord, NetworkError> {
        let target = self
            .nodes
            .get(id)
            .ok_or_else(|| NetworkError::NodeNotFound(id.clone()))?
            .choose_mutation(&mut self.rng)?;
        self.apply_mutation(id, target)
    }

    // ========== 网络级 ==========

    /// 按 `MutationConfig.scope` 对网络做一轮突变，返回实际生效的突变
    ///
    /// 没有出边的节点（输出层）在网络级突变中只会改偏置。
    /// 先为所有选中节点选定并核对突变目标，再统一抽取新值写回：
    /// 任一节点出错（节点或连接已不在表中）时整轮不生效
    pub fn mutate(&mut self) -> Result<Vec<MutationRecord>, NetworkError> {
        let candidates = self.node_ids_in_layer_order();
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        let selected: Vec<NodeId> = match self.mutation.scope {
            MutationScope::SingleNode => {
                let index = self.rng.gen_range(0..candidates.len());
                vec![candidates[index].clone()]
            }
            MutationScope::EveryNode => candidates,
            MutationScope::Rate(rate) => candidates
                .into_iter()
                .filter(|_| self.rng.gen_bool(rate))
                .collect(),
        };

        let targets = selected
            .into_iter()
            .map(|id| {
                let target = self.choose_mutation_or_bias(&id)?;
                if let MutationTarget::Weight(connection_id) = target {
                    self.connection(connection_id)?;
                }
                Ok((id, target))
            })
            .collect::<Result<Vec<_>, NetworkError>>()?;

        targets
            .into_iter()
            .map(|(id, target)| self.apply_mutation(&id, target))
            .collect()
    }

    fn choose_mutation_or_bias(&mut self, id: &NodeId) -> Result<MutationTarget, NetworkError> {
        let node = self
            .nodes
            .get(id)
            .ok_or_else(|| NetworkError::NodeNotFound(id.clone()))?;
        match node.choose_mutation(&mut self.rng) {
            Err(NetworkError::EmptyConnectionSet(_)) => Ok(MutationTarget::Bias),
            other => other,
        }
    }

    fn apply_mutation(
        &mut self,
        id: &NodeId,
        target: MutationTarget,
    ) -> Result<MutationRecord, NetworkError> {
        let new_value = draw_weight_or_bias(&mut self.rng);
        let old_value = match target {
            MutationTarget::Bias => {
                let node = self
                    .nodes
                    .get_mut(id)
                    .ok_or_else(|| NetworkError::NodeNotFound(id.clone()))?;
                let old_value = node.bias();
                node.set_bias(new_value);
                log::debug!("节点{id}的偏置突变：{old_value} -> {new_value}");
                old_value
            }
            MutationTarget::Weight(connection_id) => {
                let connection = self
                    .connections
                    .get_mut(&connection_id)
                    .ok_or(NetworkError::ConnectionNotFound(connection_id))?;
                let old_value = connection.weight();
                connection.set_weight(new_value);
                log::debug!(
                    "节点{id}的出边{connection_id}的权重突变：{old_value} -> {new_value}"
                );
                old_value
            }
        };

        Ok(MutationRecord {
            node: id.clone(),
            target,
            old_value,
            new_value,
        })
    }
}

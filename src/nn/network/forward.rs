/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : Network 前向传播 + 输出/适应度
 */

use super::{Network, NetworkError};
use crate::nn::activation::round3;

impl Network {
    /// 前向传播：按拓扑序逐层激活
    ///
    /// 输入层同样参与激活；其节点没有入边，结果即 leaky_relu(bias)
    pub fn run(&mut self) -> Result<(), NetworkError> {
        for layer in &self.layers {
            layer.activate_nodes(&mut self.nodes, &self.connections)?;
        }
        Ok(())
    }

    /// 所有输出节点激活值之和（截断到 3 位小数）
    pub fn get_output(&self) -> Result<f32, NetworkError> {
        let mut output = 0.0f32;
        for id in &self.output_nodes {
            output += self.node(id)?.activation();
        }
        Ok(round3(output))
    }

    /// 与目标值的绝对误差（截断到 3 位小数），仅用于报告，不参与突变
    pub fn test_fitness(&self, target: f32) -> Result<f32, NetworkError> {
        let difference = (target - self.get_output()?).abs();
        Ok(round3(difference))
    }
}

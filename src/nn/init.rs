/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 权重/偏置的初始化策略（网络中除节点 id 外唯一的随机来源）
 */

use super::activation::round3;
use rand::Rng;

/// 取负的阈值：第二次均匀采样超过该值（即 25% 概率）时取负
const NEGATE_THRESHOLD: f32 = 0.75;

/// 抽取一个新的权重或偏置
///
/// 在 [0, 1) 上均匀采样，以 25% 的概率取负，最后截断到 3 位小数
pub fn draw_weight_or_bias<R: Rng + ?Sized>(rng: &mut R) -> f32 {
    let mut value: f32 = rng.r#gen();
    if rng.r#gen::<f32>() > NEGATE_THRESHOLD {
        value = -value;
    }
    round3(value)
}

/// 显式给出非零值时原样返回，否则（`None` 或恰为 0）重新抽取
pub fn init_weight_or_bias<R: Rng + ?Sized>(value: Option<f32>, rng: &mut R) -> f32 {
    match value {
        Some(value) if value != 0.0 => value,
        _ => draw_weight_or_bias(rng),
    }
}

/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 标量激活函数与统一的 3 位小数精度截断
 */

/// 保留的小数位数：每次激活、每次输出/适应度计算都会截断到该精度
pub const DECIMALS: i32 = 3;

/// Leaky ReLU 负半轴斜率
pub const NEGATIVE_SLOPE: f64 = 0.1;

/// 四舍五入到 3 位小数（中点取偶，保证跨平台可复现）
pub fn round3(value: f32) -> f32 {
    let scale = 10f64.powi(DECIMALS);
    ((f64::from(value) * scale).round_ties_even() / scale) as f32
}

/// Leaky ReLU 激活函数
///
/// f(x) = round3(x)        若 round3(x) > 0
/// f(x) = round3(x) * 0.1  否则（乘积不再次截断）
pub fn leaky_relu(value: f32) -> f32 {
    let value = round3(value);
    if value > 0.0 {
        value
    } else {
        (f64::from(value) * NEGATIVE_SLOPE) as f32
    }
}

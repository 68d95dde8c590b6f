use crate::nn::activation::{leaky_relu, round3};
use approx::assert_abs_diff_eq;

#[test]
fn test_round3() {
    assert_abs_diff_eq!(round3(2.3456), 2.346, epsilon = 1e-6);
    assert_abs_diff_eq!(round3(-1.2344), -1.234, epsilon = 1e-6);
    assert_abs_diff_eq!(round3(0.0004), 0.0, epsilon = 1e-6);
    assert_eq!(round3(0.0), 0.0);
    // 已是 3 位小数的值保持不变
    assert_eq!(round3(round3(0.123)), round3(0.123));
}

#[test]
fn test_round3_midpoint_ties_to_even() {
    // 这些值在 f32 中可精确表示，乘以 1000 后恰好落在 .5 上
    assert_abs_diff_eq!(round3(0.0625), 0.062, epsilon = 1e-6);
    assert_abs_diff_eq!(round3(0.1875), 0.188, epsilon = 1e-6);
    assert_abs_diff_eq!(round3(-0.0625), -0.062, epsilon = 1e-6);
    assert_abs_diff_eq!(round3(-0.1875), -0.188, epsilon = 1e-6);
}

#[test]
fn test_leaky_relu_zero() {
    assert_eq!(leaky_relu(0.0), 0.0);
    // 截断后为 0 的负数同样得到 0
    assert_eq!(leaky_relu(-0.0004), 0.0);
}

#[test]
fn test_leaky_relu_positive_is_rounded_identity() {
    for x in [0.001f32, 0.5, 1.23456, 2.384, 17.0009] {
        assert_eq!(leaky_relu(x), round3(x));
    }
    assert_abs_diff_eq!(leaky_relu(1.23456), 1.235, epsilon = 1e-6);
}

#[test]
fn test_leaky_relu_negative_rounds_before_scaling() {
    for x in [-0.0006f32, -0.3, -1.23456, -2.0, -17.0009] {
        // 先截断到 3 位小数，再乘 0.1，乘积不再截断
        let expected = (f64::from(round3(x)) * 0.1) as f32;
        assert_eq!(leaky_relu(x), expected);
    }
    assert_abs_diff_eq!(leaky_relu(-2.0), -0.2, epsilon = 1e-6);
    assert_abs_diff_eq!(leaky_relu(-1.23456), -0.1235, epsilon = 1e-6);
    // -0.0006 截断为 -0.001，再缩放得 -0.0001（保留 4 位小数）
    assert_abs_diff_eq!(leaky_relu(-0.0006), -0.0001, epsilon = 1e-7);
}

//! # Scalar Net
//!
//! `scalar_net`是一个从零实现的极简前馈计算图：标量节点 + 带权有向边 + 有序层，
//! 通过逐层的一次前向传播求值，并通过随机突变（而非梯度）扰动权重与偏置。
//!
//! 它是学习/实验用的玩具，不是推理或训练引擎：没有反向传播，没有批处理，没有张量化。
//!

pub mod nn;
pub mod utils;

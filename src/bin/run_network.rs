/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 加载网络 -> 前向传播一次 -> 打印报告 -> 保存
 *
 * 用法：run_network [模型路径，默认 network.json] [目标值，默认 2.384] [--debug]
 * 日志级别由 RUST_LOG 控制（默认 info，--debug 时为 debug）
 */

use clap::Parser;
use scalar_net::nn::{Network, NetworkError, NetworkShape};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "加载（或生成）标量前馈网络，前向传播一次并报告与目标值的差值", long_about = None)]
struct Args {
    /// 模型文件；`.bin` 为 bincode，其它扩展名为 JSON。文件缺失或损坏时生成新网络
    #[arg(default_value = "network.json")]
    model_path: PathBuf,

    /// 期望的网络总输出
    #[arg(default_value_t = 2.384, allow_negative_numbers = true)]
    target: f32,

    /// 输出 debug 级别日志（含每次突变）
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), NetworkError> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    let mut network = Network::load_model_or_default(&args.model_path);
    if network.is_empty() {
        // (输入, 隐藏层数, 每层节点数, 输出)
        let shape = NetworkShape::default();
        log::info!("没有可用的网络，按默认形状{shape:?}生成新网络");
        network.generate(shape)?;
    }

    network.run()?;
    println!("{}", network.display_nodes()?);

    println!("总输出: {}", network.get_output()?);
    println!("目标值: {}", args.target);
    println!("------------------------");
    println!("差值: {}", network.test_fitness(args.target)?);

    network.save_model(&args.model_path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use std::path::PathBuf;

    #[test]
    fn test_args_defaults() {
        let args = Args::try_parse_from(["run_network"]).unwrap();
        assert_eq!(args.model_path, PathBuf::from("network.json"));
        assert_eq!(args.target, 2.384);
        assert!(!args.debug);
    }

    #[test]
    fn test_args_positional() {
        let args = Args::try_parse_from(["run_network", "net.bin", "-1.5", "--debug"]).unwrap();
        assert_eq!(args.model_path, PathBuf::from("net.bin"));
        assert_eq!(args.target, -1.5);
        assert!(args.debug);
    }

    #[test]
    fn test_args_unparsable_target_is_a_usage_error() {
        let err = Args::try_parse_from(["run_network", "p.json", "notanumber"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}

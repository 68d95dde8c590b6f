/*
 * @Author       : 老董
 * @Date         : 2026-10-19
 * @Description  : 端到端场景：生成 -> 前向传播 -> 报告 -> 保存 -> 加载
 *                 网络结构：Input(2) -> Hidden(3) -> Output(1)
 */
use scalar_net::nn::activation::round3;
use scalar_net::nn::{Network, NetworkError, NetworkShape};
use std::collections::HashSet;

#[test]
fn test_generate_run_report_2_1_3_1() -> Result<(), NetworkError> {
    let mut network = Network::with_seed(42);
    network.generate(NetworkShape::new(2, 1, 3, 1))?;

    assert_eq!(network.nodes_count(), 6);
    assert_eq!(network.layers().len(), 3);
    assert_eq!(network.connections_count(), 9);

    network.run()?;
    let output = network.get_output()?;
    assert!(output.is_finite());
    assert_eq!(round3(output), output);

    let target = 2.384;
    let difference = network.test_fitness(target)?;
    assert!(difference >= 0.0);

    let report = network.display_nodes()?;
    for id in network.node_ids_in_layer_order() {
        assert!(report.contains(&format!("Id: {id}")));
    }
    println!("{report}");
    println!("总输出: {output}，目标值: {target}，差值: {difference}");

    Ok(())
}

#[test]
fn test_save_then_load_reproduces_graph() -> Result<(), NetworkError> {
    let temp_file = "test_end_to_end_save_then_load.json";

    let mut network = Network::with_seed(2024);
    network.generate(NetworkShape::default())?;
    network.run()?;
    network.save_model(temp_file)?;

    let mut loaded = Network::load_model(temp_file)?;
    std::fs::remove_file(temp_file).ok();

    let ids = |n: &Network| n.node_ids_in_layer_order().into_iter().collect::<HashSet<_>>();
    assert_eq!(ids(&loaded), ids(&network));
    for id in network.node_ids_in_layer_order() {
        assert_eq!(loaded.node(&id)?.bias(), network.node(&id)?.bias());
    }
    for connection_id in network.connection_ids() {
        let original = network.connection(connection_id)?;
        let restored = loaded.connection(connection_id)?;
        assert_eq!(restored, original);
    }

    loaded.run()?;
    assert_eq!(loaded.get_output()?, network.get_output()?);
    Ok(())
}

#[test]
fn test_load_or_default_then_generate() -> Result<(), NetworkError> {
    let mut network = Network::load_model_or_default("test_end_to_end_missing_network.json");
    assert!(network.is_empty());

    // 与入口程序一致：没有可用的网络时按默认形状生成
    network.set_seed(5);
    network.generate(NetworkShape::default())?;
    network.run()?;
    assert_eq!(network.nodes_count(), NetworkShape::default().nodes_count());
    assert!(network.get_output()?.is_finite());
    Ok(())
}

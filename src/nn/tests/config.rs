use crate::assert_err;
use crate::nn::{MutationConfig, MutationScope, Network, NetworkConfig, NetworkError, NetworkShape};
use std::fs;

#[test]
fn test_config_defaults() {
    let config = NetworkConfig::default();
    assert_eq!(config.shape, NetworkShape::new(2, 3, 4, 2));
    assert_eq!(config.mutation.scope, MutationScope::SingleNode);
    assert_eq!(config.seed, None);

    // 缺省字段按默认值补齐
    assert_eq!(NetworkConfig::from_json("{}").unwrap(), config);
    let partial = NetworkConfig::from_json(r#"{ "shape": { "output_count": 5 } }"#).unwrap();
    assert_eq!(partial.shape, NetworkShape::new(2, 3, 4, 5));
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "shape": { "input_count": 2, "hidden_layer_count": 1, "nodes_per_hidden_layer": 3, "output_count": 1 },
        "mutation": { "scope": { "rate": 0.25 } },
        "seed": 42
    }"#;
    let config = NetworkConfig::from_json(json).unwrap();

    assert_eq!(config.shape, NetworkShape::new(2, 1, 3, 1));
    assert_eq!(config.mutation, MutationConfig::new(MutationScope::Rate(0.25)));
    assert_eq!(config.seed, Some(42));

    let every = NetworkConfig::from_json(r#"{ "mutation": { "scope": "every_node" } }"#).unwrap();
    assert_eq!(every.mutation.scope, MutationScope::EveryNode);
}

#[test]
fn test_config_invalid() {
    assert_err!(
        NetworkConfig::from_json(r#"{ "mutation": { "scope": { "rate": 2.0 } } }"#),
        NetworkError::InvalidOperation(msg) if msg.contains("2")
    );
    assert_err!(
        NetworkConfig::from_json(r#"{ "mutation": { "scope": "sometimes" } }"#),
        NetworkError::Json(_)
    );
}

#[test]
fn test_config_from_json_file() {
    let temp_file = "test_config_from_json_file.json";
    fs::write(temp_file, r#"{ "seed": 7 }"#).expect("写入测试文件失败");

    let config = NetworkConfig::from_json_file(temp_file).unwrap();
    assert_eq!(config.seed, Some(7));
    assert_err!(
        NetworkConfig::from_json_file("test_config_file_does_not_exist.json"),
        NetworkError::Io(_)
    );

    fs::remove_file(temp_file).ok();
}

#[test]
fn test_network_from_config() {
    let config = NetworkConfig {
        shape: NetworkShape::new(2, 1, 3, 1),
        mutation: MutationConfig::new(MutationScope::EveryNode),
        seed: Some(42),
    };

    let network1 = Network::from_config(&config).unwrap();
    let network2 = Network::from_config(&config).unwrap();

    assert_eq!(network1.nodes_count(), 6);
    assert_eq!(network1.connections_count(), 9);
    assert_eq!(network1.mutation_config().scope, MutationScope::EveryNode);
    // 固定种子：两次生成完全一致
    assert_eq!(network1.describe(), network2.describe());
}

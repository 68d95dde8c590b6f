use crate::nn::activation::round3;
use crate::nn::{Connection, ConnectionId, NodeId};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn test_connection_new_with_explicit_weight() {
    let mut rng = StdRng::seed_from_u64(42);
    let connection = Connection::new(NodeId::from("1"), NodeId::from("2"), Some(0.5), &mut rng);

    assert_eq!(connection.source(), &NodeId::from("1"));
    assert_eq!(connection.target(), &NodeId::from("2"));
    assert_eq!(connection.weight(), 0.5);
}

#[test]
fn test_connection_new_draws_weight_for_zero_sentinel() {
    let mut rng = StdRng::seed_from_u64(42);
    for weight in [None, Some(0.0)] {
        let connection = Connection::new(NodeId::from("1"), NodeId::from("2"), weight, &mut rng);
        assert!((-1.0..=1.0).contains(&connection.weight()));
        assert_eq!(connection.weight(), round3(connection.weight()));
    }
}

#[test]
fn test_connection_display() {
    let mut rng = StdRng::seed_from_u64(42);
    let connection = Connection::new(NodeId::from("11"), NodeId::from("22"), Some(-0.25), &mut rng);
    assert_eq!(format!("{}", connection), "权重 -0.25，从 11 到 22");
    assert_eq!(format!("{}", ConnectionId(3)), "#3");
}

#[test]
fn test_node_id_random_is_non_negative_integer_string() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..100 {
        let id = NodeId::random(&mut rng);
        let value: i32 = id.as_str().parse().expect("节点 id 应为整数字符串");
        assert!(value >= 0);
    }
}

mod activation;
mod config;
mod connection;

use crate::nn::{
    ConnectionDescriptor, ConnectionId, LayerDescriptor, NetworkDescriptor, NodeDescriptor,
    NodeId, NodeKind,
};

/// 手工搭建的 2-1-1 小网络，参数全部确定，便于手算验证：
///
/// ```text
/// i1(b=0.5) --0.5--\
///                   h(b=0.1) --2.0--> o(b=0.0)
/// i2(b=-0.3) --1.0-/
/// ```
///
/// 前向传播后：i1=0.5，i2=-0.03，h=0.32，o=0.64
pub(super) fn tiny_network_descriptor() -> NetworkDescriptor {
    fn node(
        id: &str,
        kind: NodeKind,
        bias: f32,
        activation: f32,
        inputs: &[u64],
        outputs: &[u64],
    ) -> NodeDescriptor {
        NodeDescriptor {
            id: NodeId::from(id),
            kind,
            bias,
            activation,
            in_connections: inputs.iter().copied().map(ConnectionId).collect(),
            out_connections: outputs.iter().copied().map(ConnectionId).collect(),
        }
    }
    fn connection(id: u64, weight: f32, source: &str, target: &str) -> ConnectionDescriptor {
        ConnectionDescriptor {
            id: ConnectionId(id),
            weight,
            source: NodeId::from(source),
            target: NodeId::from(target),
        }
    }

    let mut descriptor = NetworkDescriptor::new();
    descriptor.nodes = vec![
        node("i1", NodeKind::Input, 0.5, 1.0, &[], &[0]),
        node("i2", NodeKind::Input, -0.3, 1.0, &[], &[1]),
        node("h", NodeKind::Hidden, 0.1, 0.0, &[0, 1], &[2]),
        node("o", NodeKind::Output, 0.0, 0.0, &[2], &[]),
    ];
    descriptor.connections = vec![
        connection(0, 0.5, "i1", "h"),
        connection(1, 1.0, "i2", "h"),
        connection(2, 2.0, "h", "o"),
    ];
    descriptor.input_nodes = vec![NodeId::from("i1"), NodeId::from("i2")];
    descriptor.output_nodes = vec![NodeId::from("o")];
    descriptor.layers = vec![
        LayerDescriptor {
            number: 1,
            nodes: vec![NodeId::from("i1"), NodeId::from("i2")],
        },
        LayerDescriptor {
            number: 2,
            nodes: vec![NodeId::from("h")],
        },
        LayerDescriptor {
            number: 3,
            nodes: vec![NodeId::from("o")],
        },
    ];
    descriptor
}

//! Node builders shared by unit tests

use k8s_openapi::api::core::v1::{Node, NodeAddress, NodeSpec, NodeStatus};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use rootserver_api::{INSTANCE_IS_ROOT_SERVER, NODE_INTERNAL_IP};
use std::collections::BTreeMap;

/// A bare node with only a name
pub fn node(name: &str) -> Node {
    Node {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// A node carrying the root server label with the given raw value
pub fn labeled(name: &str, value: &str) -> Node {
    let mut node = node(name);
    node.metadata.labels = Some(BTreeMap::from([(
        INSTANCE_IS_ROOT_SERVER.to_string(),
        value.to_string(),
    )]));
    node
}

/// A root server node with a pod CIDR and the given (type, address) pairs
pub fn root_server(name: &str, pod_cidr: &str, addresses: &[(&str, &str)]) -> Node {
    let mut node = labeled(name, "true");
    with_route_info(&mut node, pod_cidr, addresses);
    node
}

/// Set the pod CIDR and status addresses of `node`
pub fn with_route_info(node: &mut Node, pod_cidr: &str, addresses: &[(&str, &str)]) {
    node.spec = Some(NodeSpec {
        pod_cidr: Some(pod_cidr.to_string()),
        ..Default::default()
    });
    node.status = Some(NodeStatus {
        addresses: Some(
            addresses
                .iter()
                .map(|(type_, address)| NodeAddress {
                    type_: type_.to_string(),
                    address: address.to_string(),
                })
                .collect(),
        ),
        ..Default::default()
    });
}

/// Shorthand for an internal IP address pair
pub fn internal(address: &str) -> (&'static str, &str) {
    (NODE_INTERNAL_IP, address)
}

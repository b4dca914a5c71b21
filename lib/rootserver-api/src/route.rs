use serde::{Deserialize, Serialize};

/// A route sending a pod CIDR to the node that owns it
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescriptor {
    /// Route name, always `<gateway>-<destination_cidr>`
    pub name: String,

    /// Name of the node the traffic is sent to
    pub target_node: String,

    /// Pod CIDR of the target node, copied verbatim
    pub destination_cidr: String,
}

impl RouteDescriptor {
    /// Build a route for `target_node`, naming it after the gateway address
    /// and the destination so the same inputs always yield the same name.
    pub fn new(
        gateway: &str,
        destination_cidr: impl Into<String>,
        target_node: impl Into<String>,
    ) -> Self {
        let destination_cidr = destination_cidr.into();
        Self {
            name: route_name(gateway, &destination_cidr),
            target_node: target_node.into(),
            destination_cidr,
        }
    }
}

/// Name of the route through `gateway` to `destination_cidr`
pub fn route_name(gateway: &str, destination_cidr: &str) -> String {
    format!("{}-{}", gateway, destination_cidr)
}

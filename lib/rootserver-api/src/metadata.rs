use k8s_openapi::api::core::v1::NodeAddress;
use serde::{Deserialize, Serialize};

/// Instance metadata reported for a node.
///
/// Only the addresses are known for root servers. Provider ID, instance
/// type, zone and region cannot be derived from the node object and stay
/// empty rather than being guessed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceMetadata {
    pub provider_id: String,
    pub instance_type: String,
    #[serde(default)]
    pub node_addresses: Vec<NodeAddress>,
    pub zone: String,
    pub region: String,
}

impl InstanceMetadata {
    /// Metadata carrying only the given addresses
    pub fn with_addresses(node_addresses: Vec<NodeAddress>) -> Self {
        Self {
            node_addresses,
            ..Default::default()
        }
    }

    /// Whether nothing at all is known about the instance
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

//! Root server queries against the cluster's nodes

use crate::label::{has_root_server_label, node_name};
use crate::{ClusterStateSource, QueryError, Result};
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Node;
use rootserver_api::{InstanceMetadata, RouteDescriptor, NODE_INTERNAL_IP};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Questions the cloud provider asks about root server nodes
#[async_trait]
pub trait Queries: Send + Sync {
    /// Whether the named node is a root server. Lookup and label errors are
    /// returned to the caller.
    async fn is_root_server(&self, node_name: &str) -> Result<bool>;

    /// Whether `node` is a root server. Never fails: any error is logged and
    /// the node is treated as a regular cloud node.
    fn is_root_server_by_node(&self, node: &Node) -> bool;

    /// Instance metadata for a root server node. Never fails: without a
    /// connection the metadata is empty.
    fn instance_metadata(&self, node: &Node) -> InstanceMetadata;

    /// Routes from every root server's pod CIDR to its internal IP
    async fn root_server_routes(&self) -> Result<Vec<RouteDescriptor>>;
}

/// Queries answered from a live cluster state source
pub struct RootServerQueries {
    source: Option<Arc<dyn ClusterStateSource>>,
}

impl RootServerQueries {
    /// Create queries reading from `source`
    pub fn new(source: Arc<dyn ClusterStateSource>) -> Self {
        Self {
            source: Some(source),
        }
    }

    /// Create queries without a connection. Every call reports
    /// `QueryError::NotConnected` or falls back to its default.
    pub fn disconnected() -> Self {
        Self { source: None }
    }

    /// Whether a cluster state source is attached
    pub fn is_connected(&self) -> bool {
        self.source.is_some()
    }

    fn source(&self) -> Result<&dyn ClusterStateSource> {
        self.source.as_deref().ok_or(QueryError::NotConnected)
    }

    /// All nodes labeled as root servers, in listing order. Nodes with an
    /// invalid label are skipped so one bad node cannot block the rest.
    async fn root_server_nodes(&self) -> Result<Vec<Node>> {
        let nodes = self
            .source()?
            .list_nodes()
            .await
            .map_err(QueryError::ListNodes)?;

        debug!("Listed {} nodes", nodes.len());

        let root_servers = nodes
            .into_iter()
            .filter(|node| match has_root_server_label(node) {
                Ok(is_root_server) => is_root_server,
                Err(e) => {
                    warn!(node = node_name(node), "Skipping node: {}", e);
                    false
                }
            })
            .collect();

        Ok(root_servers)
    }
}

#[async_trait]
impl Queries for RootServerQueries {
    async fn is_root_server(&self, node_name: &str) -> Result<bool> {
        let node = self
            .source()?
            .get_node(node_name)
            .await
            .map_err(|source| QueryError::NodeLookup {
                node: node_name.to_string(),
                source,
            })?;

        has_root_server_label(&node)
    }

    fn is_root_server_by_node(&self, node: &Node) -> bool {
        if let Err(e) = self.source() {
            error!("{}", e);
            return false;
        }

        match has_root_server_label(node) {
            Ok(is_root_server) => is_root_server,
            Err(e) => {
                error!(
                    node = node_name(node),
                    "Failed to query root server label; assuming it's a cloud node: {}", e
                );
                false
            }
        }
    }

    fn instance_metadata(&self, node: &Node) -> InstanceMetadata {
        if let Err(e) = self.source() {
            error!(node = node_name(node), "{}", e);
            return InstanceMetadata::default();
        }

        let addresses = node
            .status
            .as_ref()
            .and_then(|status| status.addresses.clone())
            .unwrap_or_default();

        InstanceMetadata::with_addresses(addresses)
    }

    async fn root_server_routes(&self) -> Result<Vec<RouteDescriptor>> {
        let root_servers = self.root_server_nodes().await?;

        let routes: Vec<RouteDescriptor> = root_servers.iter().filter_map(route_for_node).collect();

        debug!(
            "Derived {} routes from {} root servers",
            routes.len(),
            root_servers.len()
        );
        Ok(routes)
    }
}

/// Route to `node`'s pod CIDR via its first internal IP, if it has both
fn route_for_node(node: &Node) -> Option<RouteDescriptor> {
    let name = node_name(node);

    let Some(destination) = node
        .spec
        .as_ref()
        .and_then(|spec| spec.pod_cidr.as_deref())
        .filter(|cidr| !cidr.is_empty())
    else {
        debug!(node = name, "Root server has no pod CIDR, skipping route");
        return None;
    };

    let Some(gateway) = internal_ip(node) else {
        debug!(node = name, "Root server has no internal IP, skipping route");
        return None;
    };

    Some(RouteDescriptor::new(gateway, destination, name))
}

/// First non-empty internal IP in the node's status addresses
fn internal_ip(node: &Node) -> Option<&str> {
    node.status
        .as_ref()?
        .addresses
        .as_ref()?
        .iter()
        .find(|address| address.type_ == NODE_INTERNAL_IP && !address.address.is_empty())
        .map(|address| address.address.as_str())
}

/// Queries for clusters without root servers: nothing is ever a root server
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopQueries;

#[async_trait]
impl Queries for NoopQueries {
    async fn is_root_server(&self, _node_name: &str) -> Result<bool> {
        Ok(false)
    }

    fn is_root_server_by_node(&self, _node: &Node) -> bool {
        false
    }

    fn instance_metadata(&self, _node: &Node) -> InstanceMetadata {
        InstanceMetadata::default()
    }

    async fn root_server_routes(&self) -> Result<Vec<RouteDescriptor>> {
        Ok(Vec::new())
    }
}

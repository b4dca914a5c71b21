//! Access to the cluster's node objects

use crate::SourceError;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Node;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Read-only view of the cluster's nodes.
///
/// Every call goes to the backing store; implementations must not cache.
#[async_trait]
pub trait ClusterStateSource: Send + Sync {
    /// Fetch a single node by name
    async fn get_node(&self, name: &str) -> Result<Node, SourceError>;

    /// Fetch every node currently in the cluster
    async fn list_nodes(&self) -> Result<Vec<Node>, SourceError>;
}

/// ClusterStateSource over a fixed set of nodes, for tests and dry runs
pub struct StaticNodeSource {
    nodes: Vec<Node>,
    unavailable: Option<String>,
    get_calls: AtomicUsize,
    list_calls: AtomicUsize,
}

impl StaticNodeSource {
    /// Serve the given nodes, in order
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            nodes,
            unavailable: None,
            get_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
        }
    }

    /// A source whose every call fails with `SourceError::Unavailable`
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            unavailable: Some(message.into()),
            ..Self::new(Vec::new())
        }
    }

    /// Number of `get_node` calls served so far
    pub fn get_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }

    /// Number of `list_nodes` calls served so far
    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> Result<(), SourceError> {
        match &self.unavailable {
            Some(message) => Err(SourceError::Unavailable(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ClusterStateSource for StaticNodeSource {
    async fn get_node(&self, name: &str) -> Result<Node, SourceError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        self.nodes
            .iter()
            .find(|node| node.metadata.name.as_deref() == Some(name))
            .cloned()
            .ok_or_else(|| SourceError::NotFound(name.to_string()))
    }

    async fn list_nodes(&self) -> Result<Vec<Node>, SourceError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        Ok(self.nodes.clone())
    }
}

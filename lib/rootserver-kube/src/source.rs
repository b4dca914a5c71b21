//! Node source backed by the Kubernetes API

use crate::SourceConfig;
use async_trait::async_trait;
use k8s_openapi::api::core::v1::Node;
use kube::api::ListParams;
use kube::{Api, Client};
use rootserver_core::{ClusterStateSource, SourceError};
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// KubeNodeSource reads cluster nodes straight from the API server
pub struct KubeNodeSource {
    nodes: Api<Node>,
    request_timeout: Option<Duration>,
}

impl KubeNodeSource {
    /// Create a node source on top of an existing client
    pub fn new(client: Client, config: &SourceConfig) -> Self {
        Self {
            nodes: Api::all(client),
            request_timeout: config.request_timeout,
        }
    }
}

#[async_trait]
impl ClusterStateSource for KubeNodeSource {
    async fn get_node(&self, name: &str) -> Result<Node, SourceError> {
        debug!(node = name, "Fetching node");

        with_timeout(self.request_timeout, self.nodes.get(name))
            .await
            .map_err(|e| not_found_as(name, e))
    }

    async fn list_nodes(&self) -> Result<Vec<Node>, SourceError> {
        let list = with_timeout(self.request_timeout, self.nodes.list(&ListParams::default())).await?;

        debug!("Listed {} nodes", list.items.len());
        Ok(list.items)
    }
}

/// Run an API request, failing with `SourceError::Timeout` once `timeout` elapses
async fn with_timeout<T, F>(timeout: Option<Duration>, request: F) -> Result<T, SourceError>
where
    F: Future<Output = Result<T, kube::Error>>,
{
    match timeout {
        Some(limit) => match tokio::time::timeout(limit, request).await {
            Ok(result) => result.map_err(SourceError::from),
            Err(_) => Err(SourceError::Timeout(limit)),
        },
        None => request.await.map_err(SourceError::from),
    }
}

/// Turn a 404 from the API server into `SourceError::NotFound`
fn not_found_as(name: &str, err: SourceError) -> SourceError {
    match err {
        SourceError::Kubernetes(kube::Error::Api(response)) if response.code == 404 => {
            SourceError::NotFound(name.to_string())
        }
        other => other,
    }
}

use std::time::Duration;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

/// Failures reported by a cluster state source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("node not found: {0}")]
    NotFound(String),

    #[error("cluster state unavailable: {0}")]
    Unavailable(String),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Kubernetes error: {0}")]
    Kubernetes(#[from] kube::error::Error),
}

/// Failures returned by root server queries
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("no connection to kubernetes API")]
    NotConnected,

    #[error("failed to retrieve k8s node info for node '{node}': {source}")]
    NodeLookup {
        node: String,
        #[source]
        source: SourceError,
    },

    #[error("node {node} has invalid label '{label}': invalid boolean value {value:?}")]
    InvalidLabel {
        node: String,
        label: &'static str,
        value: String,
    },

    #[error("failed to list k8s nodes: {0}")]
    ListNodes(#[source] SourceError),
}

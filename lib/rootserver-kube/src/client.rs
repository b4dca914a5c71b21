//! Connection bootstrap for root server queries

use crate::{KubeNodeSource, SourceConfig};
use kube::Client;
use rootserver_core::RootServerQueries;
use std::sync::Arc;
use tracing::{error, info};

/// Connect to the cluster the process runs in (or the local kubeconfig).
///
/// Startup never fails on a missing connection: the error is logged and the
/// returned queries report `NotConnected` or fall back to their defaults.
pub async fn connect(config: &SourceConfig) -> RootServerQueries {
    match Client::try_default().await {
        Ok(client) => {
            info!("Connected to Kubernetes API");
            with_client(client, config)
        }
        Err(e) => {
            error!("k8s clients can't be initialized: {}", e);
            RootServerQueries::disconnected()
        }
    }
}

/// Build queries on top of an existing client
pub fn with_client(client: Client, config: &SourceConfig) -> RootServerQueries {
    RootServerQueries::new(Arc::new(KubeNodeSource::new(client, config)))
}

use anyhow::{Context, Result};
use rootserver_api::RouteDescriptor;
use rootserver_core::Queries;
use rootserver_kube::{connect, SourceConfig};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Node to classify in addition to listing routes
const NODE_ENV: &str = "ROOTSERVER_NODE";
/// `json` for JSON log lines, anything else for text
const LOG_FORMAT_ENV: &str = "ROOTSERVER_LOG_FORMAT";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    routes: Vec<RouteDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    node: Option<NodeReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct NodeReport {
    name: String,
    root_server: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    info!("Starting rootserver-inspect...");

    let config = SourceConfig::from_env()?;
    let queries = connect(&config).await;
    if !queries.is_connected() {
        warn!("Running without a Kubernetes connection");
    }

    let report = inspect(&queries, std::env::var(NODE_ENV).ok()).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if std::env::var(LOG_FORMAT_ENV).is_ok_and(|format| format == "json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

/// Collect the route set and, if asked, the classification of one node
async fn inspect(queries: &dyn Queries, node: Option<String>) -> Result<Report> {
    let routes = queries
        .root_server_routes()
        .await
        .context("failed to derive root server routes")?;
    info!("Found {} root server routes", routes.len());

    let node = match node {
        Some(name) => {
            let root_server = queries
                .is_root_server(&name)
                .await
                .with_context(|| format!("failed to classify node {}", name))?;
            Some(NodeReport { name, root_server })
        }
        None => None,
    };

    Ok(Report { routes, node })
}

//! Kubernetes integration for root server queries
pub mod client;
pub mod config;
pub mod source;

pub use client::connect;
pub use config::SourceConfig;
pub use source::KubeNodeSource;

//! Root server API types shared by the query core and its integrations
//!
//! This library defines:
//! - The node label that marks a node as a root server
//! - RouteDescriptor: a pod CIDR route pointing at a root server node
//! - InstanceMetadata: what the cloud provider reports about a node

pub mod label;
pub mod metadata;
pub mod route;

pub use label::{INSTANCE_IS_ROOT_SERVER, NODE_INTERNAL_IP};
pub use metadata::InstanceMetadata;
pub use route::RouteDescriptor;

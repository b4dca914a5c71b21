//! Root server classification and route derivation
//!
//! This library provides:
//! - Parsing of the root server node label
//! - Classification of a single node, by name or by node object
//! - Derivation of pod CIDR routes towards every root server node
//!
//! Node state is read through a [`ClusterStateSource`] on every call;
//! nothing is cached.

pub mod error;
pub mod label;
pub mod queries;
pub mod source;

#[cfg(test)]
mod fixtures;

pub use error::{QueryError, Result, SourceError};
pub use label::has_root_server_label;
pub use queries::{NoopQueries, Queries, RootServerQueries};
pub use source::{ClusterStateSource, StaticNodeSource};

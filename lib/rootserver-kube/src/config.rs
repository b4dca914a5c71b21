//! Settings for talking to the Kubernetes API

use anyhow::{Context, Result};
use std::time::Duration;

/// Environment variable holding the per-request API timeout in seconds
pub const API_TIMEOUT_ENV: &str = "ROOTSERVER_API_TIMEOUT_SECS";

const DEFAULT_API_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration of the Kubernetes node source
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceConfig {
    /// Timeout applied to each API request, `None` to wait indefinitely
    pub request_timeout: Option<Duration>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            request_timeout: Some(DEFAULT_API_TIMEOUT),
        }
    }
}

impl SourceConfig {
    /// Load the configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let timeout = std::env::var(API_TIMEOUT_ENV).ok();
        Ok(Self {
            request_timeout: parse_timeout(timeout.as_deref())?,
        })
    }
}

/// Parse a timeout in whole seconds. Unset means the default, `0` disables it.
fn parse_timeout(value: Option<&str>) -> Result<Option<Duration>> {
    let Some(value) = value else {
        return Ok(Some(DEFAULT_API_TIMEOUT));
    };

    let secs: u64 = value
        .trim()
        .parse()
        .with_context(|| format!("invalid {} value {:?}", API_TIMEOUT_ENV, value))?;

    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}

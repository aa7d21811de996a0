//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! server. Request handlers never read process-wide environment variables.

use crate::constants::DEFAULT_REST_ADDR;
use crate::{SymptomError, SymptomResult};
use std::net::SocketAddr;

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    rest_addr: SocketAddr,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(rest_addr: SocketAddr) -> Self {
        Self { rest_addr }
    }

    pub fn rest_addr(&self) -> SocketAddr {
        self.rest_addr
    }
}

/// Parse the REST listen address from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns `DEFAULT_REST_ADDR`.
pub fn rest_addr_from_env_value(value: Option<String>) -> SymptomResult<SocketAddr> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_REST_ADDR.to_string());

    value
        .parse::<SocketAddr>()
        .map_err(|e| SymptomError::InvalidConfig(format!("invalid listen address {value:?}: {e}")))
}

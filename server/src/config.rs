//! Server configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::SocketAddr;

use crate::error::ServerError;

pub const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Loads `.env` first when present.
    ///
    /// Optional:
    /// - `SIGNUP_ADDR`: listen address, default `0.0.0.0:3000`
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] when `SIGNUP_ADDR` is not a socket address.
    pub fn from_env() -> Result<Self, ServerError> {
        let _ = dotenvy::dotenv();
        Self::from_addr(std::env::var("SIGNUP_ADDR").ok().as_deref())
    }

    fn from_addr(raw: Option<&str>) -> Result<Self, ServerError> {
        let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_ADDR);
        let addr = raw
            .parse::<SocketAddr>()
            .map_err(|e| ServerError::Config(format!("SIGNUP_ADDR={raw:?}: {e}")))?;
        Ok(Self { addr })
    }
}

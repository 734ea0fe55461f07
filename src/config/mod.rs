//! Runtime configuration

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Configuration for the user-registry server
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind (`USER_REGISTRY_ADDR`)
    pub addr: SocketAddr,

    /// Seed the store with demo users on startup (`USER_REGISTRY_SEED`)
    pub seed: bool,
}

impl ServerConfig {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Result<Self> {
        let addr = env::var("USER_REGISTRY_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
        let addr = addr
            .parse()
            .with_context(|| format!("invalid USER_REGISTRY_ADDR '{}'", addr))?;

        let seed = env::var("USER_REGISTRY_SEED")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self { addr, seed })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.parse().expect("default address is valid"),
            seed: false,
        }
    }
}

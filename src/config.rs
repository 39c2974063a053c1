use std::env;

use log::warn;
use serde::{Deserialize, Serialize};

pub const HOST_VAR: &str = "SEARCH_UI_HOST";
pub const PORT_VAR: &str = "SEARCH_UI_PORT";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Defaults, overridden by `SEARCH_UI_HOST` / `SEARCH_UI_PORT` when set.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(host) = get(HOST_VAR).filter(|h| !h.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = get(PORT_VAR) {
            match port.trim().parse::<u16>() {
                Ok(p) => config.port = p,
                Err(e) => warn!("Ignoring {}={:?}: {}", PORT_VAR, port, e),
            }
        }
        config
    }

    pub fn address(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

//! Server configuration from environment variables

use std::env;

/// Listener configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// TCP port to bind
    pub port: u16,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables. Missing or
    /// malformed values fall back to the defaults.
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5000);

        Self { host, port }
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

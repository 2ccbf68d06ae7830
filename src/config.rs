//! # Server Configuration
//!
//! Listen address, store target, and CORS settings. The store target comes
//! from configuration rather than code so tests can point the process at an
//! isolated store.

use serde::{Deserialize, Serialize};

/// Environment variable naming the listen address (`host:port`)
pub const LISTEN_ENV: &str = "QUILL_LISTEN";

/// Environment variable naming the store target (`mem:` or `file:<path>`)
pub const STORE_URL_ENV: &str = "QUILL_STORE_URL";

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "127.0.0.1")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 7070; 0 picks an ephemeral port)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Store connection target (default: "mem:")
    #[serde(default = "default_store_url")]
    pub store_url: String,

    /// CORS allowed origins; empty means permissive
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    7070
}

fn default_store_url() -> String {
    "mem:".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            store_url: default_store_url(),
            cors_origins: Vec::new(),
        }
    }
}

impl ServerConfig {
    /// Create a config with the specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Defaults, overridden by `QUILL_LISTEN` / `QUILL_STORE_URL` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(listen) = std::env::var(LISTEN_ENV) {
            match parse_listen(&listen) {
                Some((host, port)) => {
                    config.host = host;
                    config.port = port;
                }
                None => tracing::warn!(%listen, "ignoring malformed {LISTEN_ENV}"),
            }
        }
        if let Ok(url) = std::env::var(STORE_URL_ENV) {
            config.store_url = url;
        }
        config
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

pub(crate) fn parse_listen(listen: &str) -> Option<(String, u16)> {
    let (host, port) = listen.rsplit_once(':')?;
    let port = port.parse().ok()?;
    if host.is_empty() {
        return None;
    }
    Some((host.to_string(), port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 7070);
        assert_eq!(config.store_url, "mem:");
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn test_socket_addr() {
        let config = ServerConfig::with_port(8080);
        assert_eq!(config.socket_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_parse_listen() {
        assert_eq!(
            parse_listen("0.0.0.0:9000"),
            Some(("0.0.0.0".to_string(), 9000))
        );
        assert_eq!(parse_listen("no-port"), None);
        assert_eq!(parse_listen(":7070"), None);
        assert_eq!(parse_listen("localhost:notaport"), None);
    }
}

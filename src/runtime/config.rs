//! Local runtime configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the local development runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Function name reported in each invocation context.
    pub function_name: String,
    /// Whether to serve the `/_health` endpoint.
    pub enable_health: bool,
    /// Maximum request body size in bytes.
    pub max_body_size: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            function_name: "shunt-dev".to_string(),
            enable_health: true,
            max_body_size: 10 * 1024 * 1024,
        }
    }
}

impl RuntimeConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the reported function name.
    pub fn function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    /// Disable the `/_health` endpoint.
    pub fn without_health(mut self) -> Self {
        self.enable_health = false;
        self
    }

    /// Set the maximum request body size in bytes.
    pub fn max_body_size(mut self, bytes: usize) -> Self {
        self.max_body_size = bytes;
        self
    }

    /// The bind address as `host:port`.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RuntimeConfig::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8080");
        assert!(config.enable_health);
    }

    #[test]
    fn test_builder_methods() {
        let config = RuntimeConfig::new()
            .host("127.0.0.1")
            .port(3000)
            .function_name("orders")
            .without_health();

        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.function_name, "orders");
        assert!(!config.enable_health);
    }
}

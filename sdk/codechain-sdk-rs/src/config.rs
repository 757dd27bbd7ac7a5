//! Client configuration.
//!
//! Loaded from a TOML file or from the `CODECHAIN_RPC_HTTP` environment
//! variable.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::errors::{Result, SdkError};

/// Environment variable holding the node's HTTP RPC endpoint.
pub const RPC_URL_ENV: &str = "CODECHAIN_RPC_HTTP";

/// Endpoint used when nothing else is configured.
pub const DEFAULT_RPC_URL: &str = "http://localhost:8080";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Node HTTP RPC endpoint
    pub rpc_url: String,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ClientConfig {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            SdkError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        let config: ClientConfig = toml::from_str(&contents).map_err(|e| {
            SdkError::Config(format!("Failed to parse config file '{}': {}", path.display(), e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read the endpoint from `CODECHAIN_RPC_HTTP`, falling back to the default.
    pub fn from_env() -> Self {
        match std::env::var(RPC_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => {
                tracing::info!("{} not set, using {}", RPC_URL_ENV, DEFAULT_RPC_URL);
                Self::default()
            }
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_secs = timeout.as_secs();
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.rpc_url.starts_with("http://") || self.rpc_url.starts_with("https://")) {
            return Err(SdkError::Config(format!(
                "rpc_url must be an http(s) URL: {}",
                self.rpc_url
            )));
        }
        if self.timeout_secs == 0 {
            return Err(SdkError::Config("timeout_secs must be non-zero".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.rpc_url, "http://localhost:8080");
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rpc_url = \"http://node.local:8080\"").unwrap();
        writeln!(file, "timeout_secs = 5").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.rpc_url, "http://node.local:8080");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_from_file_uses_defaults_for_missing_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rpc_url = \"https://node.local\"").unwrap();

        let config = ClientConfig::from_file(file.path()).unwrap();
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_from_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        assert!(matches!(ClientConfig::from_file(&missing), Err(SdkError::Config(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rpc_url = ").unwrap();
        assert!(matches!(ClientConfig::from_file(file.path()), Err(SdkError::Config(_))));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rpc_url = \"localhost:8080\"").unwrap();
        assert!(matches!(ClientConfig::from_file(file.path()), Err(SdkError::Config(_))));
    }

    #[test]
    fn test_from_env() {
        std::env::set_var(RPC_URL_ENV, "http://10.0.0.1:8080");
        assert_eq!(ClientConfig::from_env().rpc_url, "http://10.0.0.1:8080");
        std::env::remove_var(RPC_URL_ENV);
        assert_eq!(ClientConfig::from_env(), ClientConfig::default());
    }
}

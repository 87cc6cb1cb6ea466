//! Configuration structures for the relay.

use serde::{Deserialize, Serialize};

use crate::error::{KachError, Result};

/// Main configuration for the kach relay.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KachConfig {
    /// Forwarding configuration.
    pub forward: ForwardConfig,
}

/// Forwarding configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ForwardConfig {
    /// Base URL of the backend. Empty disables forwarding.
    ///
    /// A local development backend typically runs at
    /// `http://localhost:3000/api`.
    pub backend_url: String,

    /// Timeout in seconds for a single forward attempt.
    pub timeout_secs: u64,
}

impl Default for ForwardConfig {
    fn default() -> Self {
        Self {
            backend_url: String::new(),
            timeout_secs: 30,
        }
    }
}

impl ForwardConfig {
    /// The endpoint a dispatch call should target.
    pub fn endpoint(&self) -> EndpointConfig {
        EndpointConfig::new(self.backend_url.clone())
    }
}

/// Endpoint a single dispatch call targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Base URL records are POSTed under. Empty means forwarding disabled.
    pub base_url: String,
}

impl EndpointConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// An endpoint that performs no network action.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn is_disabled(&self) -> bool {
        self.base_url.trim().is_empty()
    }
}

impl KachConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| KachError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| KachError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_disable_forwarding() {
        let config = KachConfig::default();

        assert!(config.forward.endpoint().is_disabled());
        assert_eq!(config.forward.timeout_secs, 30);
    }

    #[test]
    fn config_round_trips_through_json() {
        let mut config = KachConfig::default();
        config.forward.backend_url = "http://localhost:3000/api".to_string();

        let json = serde_json::to_string(&config).unwrap();
        let parsed: KachConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.forward.backend_url, config.forward.backend_url);
        assert!(!parsed.forward.endpoint().is_disabled());
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let parsed: KachConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(parsed.forward.backend_url, "");
    }

    #[test]
    fn blank_base_url_counts_as_disabled() {
        assert!(EndpointConfig::new("  ").is_disabled());
        assert!(!EndpointConfig::new("http://localhost:3000").is_disabled());
    }
}

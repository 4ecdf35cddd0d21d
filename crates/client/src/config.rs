//! Client configuration.

use serde::Deserialize;

/// Client configuration loaded from environment variables.
///
/// Environment variables are prefixed with `AULA_`:
/// - `AULA_BASE_URL`: API base URL (default: "http://localhost:8000")
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// API base URL, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl ClientConfig {
    /// Build a configuration for an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are prefixed with `AULA_`.
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::prefixed("AULA_").from_env::<ClientConfig>()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_explicit_base_url() {
        let config = ClientConfig::new("https://api.aula.example");
        assert_eq!(config.base_url, "https://api.aula.example");
    }
}

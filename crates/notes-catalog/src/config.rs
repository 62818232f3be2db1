use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::platform;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub newsletter: NewsletterConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Episode data source.  The builtin dataset is used when the TOML file
/// at `episodes_toml` does not exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_episodes_toml")]
    pub episodes_toml: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterConfig {
    /// Simulated confirmation latency for the subscribe call.  There is no
    /// real upstream; the delay exists so the form feels like a network hop.
    #[serde(default = "default_confirm_delay_ms")]
    pub confirm_delay_ms: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            episodes_toml: default_episodes_toml(),
        }
    }
}

impl Default for NewsletterConfig {
    fn default() -> Self {
        Self {
            confirm_delay_ms: default_confirm_delay_ms(),
        }
    }
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8098
}

fn default_episodes_toml() -> PathBuf {
    platform::config_dir().join("episodes.toml")
}

fn default_confirm_delay_ms() -> u64 {
    1500
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path();

        if !config_path.exists() {
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        platform::config_dir().join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.http.bind_address, "127.0.0.1");
        assert_eq!(config.http.port, 8098);
        assert_eq!(config.newsletter.confirm_delay_ms, 1500);
        assert!(config
            .catalog
            .episodes_toml
            .ends_with("sonic-notes/episodes.toml"));
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [http]
            port = 9000
        "#,
        )
        .unwrap();
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.http.bind_address, "127.0.0.1");
        assert_eq!(config.newsletter.confirm_delay_ms, 1500);
    }
}

use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub inference: InferenceConfig,
    #[serde(default)]
    pub geocoding: GeocodingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Ollama chat endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    #[serde(default = "default_inference_url")]
    pub url: String,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_inference_timeout_secs")]
    pub timeout_secs: u64,
}

/// Reverse geocoding endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodingConfig {
    #[serde(default = "default_geocoding_url")]
    pub url: String,
    /// Nominatim rejects requests without an identifying agent.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_geocoding_timeout_secs")]
    pub timeout_secs: u64,
}

impl InferenceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl GeocodingConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            url: default_inference_url(),
            model: default_model(),
            timeout_secs: default_inference_timeout_secs(),
        }
    }
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            url: default_geocoding_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_geocoding_timeout_secs(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_inference_url() -> String {
    "http://localhost:11434/api/chat".to_string()
}

fn default_model() -> String {
    "qwen".to_string()
}

fn default_inference_timeout_secs() -> u64 {
    120
}

fn default_geocoding_url() -> String {
    "https://nominatim.openstreetmap.org/reverse".to_string()
}

fn default_user_agent() -> String {
    "HaloocomNavigator/1.0".to_string()
}

fn default_geocoding_timeout_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_match_local_setup() {
        let config = Config::default();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.server.logs.level, "info");
        assert_eq!(config.inference.url, "http://localhost:11434/api/chat");
        assert_eq!(config.inference.model, "qwen");
        assert_eq!(config.geocoding.user_agent, "HaloocomNavigator/1.0");
        assert_eq!(config.geocoding.timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
inference:
  model: "llama3"
server:
  port: 8080
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(config.inference.model, "llama3");
        assert_eq!(config.inference.url, "http://localhost:11434/api/chat");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(
            config.geocoding.url,
            "https://nominatim.openstreetmap.org/reverse"
        );
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.inference.timeout_secs, 120);
    }
}

use haloo_navigator::config::{
    Config, GeocodingConfig, InferenceConfig, LogsConfig, ServerConfig,
};
use std::net::TcpListener;

/// Create a test configuration pointing both services at the given URLs
pub fn create_test_config(inference_url: &str, geocoding_url: &str) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        inference: InferenceConfig {
            url: inference_url.to_string(),
            model: "qwen".to_string(),
            timeout_secs: 5,
        },
        geocoding: GeocodingConfig {
            url: geocoding_url.to_string(),
            user_agent: "HaloocomNavigator/1.0".to_string(),
            timeout_secs: 5,
        },
    }
}

/// A local URL nothing is listening on
pub fn unreachable_url(path: &str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind probe socket");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}{}", port, path)
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 8080
  logs:
    level: "debug"

inference:
  url: "http://ollama.internal:11434/api/chat"
  model: "llama3"
  timeout_secs: 30

geocoding:
  url: "https://geo.example.com/reverse"
  user_agent: "TestNavigator/0.1"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
server:
  port: "not-a-number"
"#;

use std::sync::Arc;
use tempfile::TempDir;
use tokio::fs;
use worddee_relay::{
    Result,
    config::{Config, FallbackConfig, RelayConfig, ServerConfig, WebhookConfig},
    relay::Relay,
    webhook::{HttpWebhookClient, WebhookClient},
};

/// Create a test configuration pointing at the given webhook URL
pub fn create_test_config(webhook_url: &str) -> Config {
    Config {
        server: ServerConfig::default(),
        webhook: WebhookConfig {
            url: webhook_url.to_string(),
            timeout_secs: 1,
        },
        relay: RelayConfig::default(),
        fallback: FallbackConfig::default(),
    }
}

/// Create a relay backed by a real HTTP client
pub fn create_http_relay(config: &Config) -> Relay {
    let client = HttpWebhookClient::new(&config.webhook).expect("Failed to build webhook client");
    Relay::new(Arc::new(client), config.fallback.clone())
}

/// Create a relay backed by any webhook client
pub fn create_relay(client: Arc<dyn WebhookClient>) -> Relay {
    Relay::new(client, FallbackConfig::default())
}

/// Write a config YAML file into a temporary directory
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> Result<String> {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content).await?;
    Ok(config_path.to_string_lossy().to_string())
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9000
  banner: "test banner"
  logs:
    level: "debug"

webhook:
  url: "http://localhost:5678/webhook/evaluate"
  timeout_secs: 5

relay:
  empty_sentence: error_body

fallback:
  score_min: 5.0
  score_max: 6.0
  levels: ["Novice"]
  suggestion: "Try again"
  capitalize: false
"#;

/// Configuration without the required webhook section
pub const MISSING_WEBHOOK_YAML: &str = r#"
server:
  port: 9000
"#;

/// Assert that a fallback body carries a sane synthesized evaluation
pub fn assert_fallback_shape(body: &serde_json::Value, fallback: &FallbackConfig, sentence: &str) {
    let score = body["score"].as_f64().expect("score must be a number");
    assert!(
        (fallback.score_min..=fallback.score_max).contains(&score),
        "score {} out of fallback range",
        score
    );
    let level = body["level"].as_str().expect("level must be a string");
    assert!(fallback.levels.iter().any(|l| l == level));
    assert_eq!(body["suggestion"], fallback.suggestion.as_str());
    assert_eq!(body["corrected_sentence"], sentence);
}

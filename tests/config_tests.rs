mod common;

use common::{MISSING_WEBHOOK_YAML, SAMPLE_CONFIG_YAML, create_test_config_file};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use worddee_relay::{Error, config::{self, EmptySentencePolicy}};

#[tokio::test]
async fn test_load_from_sample_file() {
    let dir = TempDir::new().unwrap();
    let path = create_test_config_file(&dir, SAMPLE_CONFIG_YAML).await.unwrap();

    let config = config::load_from(&path).await.unwrap();

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 9000);
    assert_eq!(config.server.banner, "test banner");
    assert_eq!(config.server.logs.level, "debug");
    assert_eq!(config.webhook.url, "http://localhost:5678/webhook/evaluate");
    assert_eq!(config.webhook.timeout_secs, 5);
    assert_eq!(config.relay.empty_sentence, EmptySentencePolicy::ErrorBody);
    assert_eq!(config.fallback.levels, vec!["Novice".to_string()]);
    assert_eq!(config.fallback.suggestion, "Try again");
    assert!(!config.fallback.capitalize);
}

#[tokio::test]
async fn test_load_from_requires_webhook() {
    let dir = TempDir::new().unwrap();
    let path = create_test_config_file(&dir, MISSING_WEBHOOK_YAML).await.unwrap();

    let result = config::load_from(&path).await;

    assert!(matches!(result, Err(Error::Yaml(_))));
}

#[tokio::test]
async fn test_load_from_validates() {
    let dir = TempDir::new().unwrap();
    let yaml = "webhook:\n  url: \"\"\n";
    let path = create_test_config_file(&dir, yaml).await.unwrap();

    let result = config::load_from(&path).await;

    assert!(matches!(result, Err(Error::Config(_))));
}

#[tokio::test]
async fn test_load_from_missing_file() {
    let dir = TempDir::new().unwrap();

    let result = config::load_from(dir.path().join("absent.yaml")).await;

    assert!(matches!(result, Err(Error::Io(_))));
}

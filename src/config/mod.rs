mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());

    let mut config = load_from(&config_path).await?;

    if let Ok(url) = env::var("WEBHOOK_URL") {
        debug!("Webhook URL overridden by WEBHOOK_URL");
        config.webhook.url = url;
        config.validate()?;
    }

    Ok(config)
}

pub async fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    debug!("Loading configuration from: {}", path.display());

    let config_str = tokio::fs::read_to_string(path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;
    config.validate()?;

    Ok(config)
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.webhook.url.trim().is_empty() {
            return Err(Error::config("webhook.url must not be empty"));
        }
        if self.webhook.timeout_secs == 0 {
            return Err(Error::config("webhook.timeout_secs must be positive"));
        }

        let fallback = &self.fallback;
        if !(0.0..=10.0).contains(&fallback.score_min) || !(0.0..=10.0).contains(&fallback.score_max)
        {
            return Err(Error::config("fallback scores must lie within 0..=10"));
        }
        if fallback.score_min > fallback.score_max {
            return Err(Error::config(format!(
                "fallback.score_min ({}) exceeds fallback.score_max ({})",
                fallback.score_min, fallback.score_max
            )));
        }
        if fallback.levels.is_empty() {
            return Err(Error::config("fallback.levels must not be empty"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn minimal(yaml_tail: &str) -> Config {
        let yaml = format!("webhook:\n  url: \"http://localhost:5678/hook\"\n{yaml_tail}");
        serde_yaml::from_str(&yaml).unwrap()
    }

    #[test]
    fn test_defaults_applied() {
        let config = minimal("");

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.server.logs.level, "info");
        assert_eq!(config.webhook.timeout_secs, 30);
        assert_eq!(config.relay.empty_sentence, EmptySentencePolicy::Reject);
        assert_eq!(config.fallback.score_min, 6.5);
        assert_eq!(config.fallback.score_max, 9.8);
        assert_eq!(config.fallback.levels.len(), 3);
        assert!(config.fallback.capitalize);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_sentence_policy_parsing() {
        let config = minimal("relay:\n  empty_sentence: error_body\n");
        assert_eq!(config.relay.empty_sentence, EmptySentencePolicy::ErrorBody);
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let config = minimal("fallback:\n  score_min: 9.0\n  score_max: 7.0\n");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("exceeds"));
    }

    #[test]
    fn test_validate_rejects_out_of_scale_scores() {
        let config = minimal("fallback:\n  score_max: 11.0\n");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_levels() {
        let config = minimal("fallback:\n  levels: []\n");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_url_and_zero_timeout() {
        let mut config = minimal("");
        config.webhook.url = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = minimal("");
        config.webhook.timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}

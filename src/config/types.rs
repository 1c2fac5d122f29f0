use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub webhook: WebhookConfig,
    #[serde(default)]
    pub relay: RelayConfig,
    #[serde(default)]
    pub fallback: FallbackConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_banner")]
    pub banner: String,
    #[serde(default)]
    pub logs: LogsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookConfig {
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelayConfig {
    #[serde(default)]
    pub empty_sentence: EmptySentencePolicy,
}

/// How `POST /api/validate-sentence` answers a blank sentence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptySentencePolicy {
    /// `400 Bad Request` with an error body.
    #[default]
    Reject,
    /// `200 OK` with an error body.
    ErrorBody,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackConfig {
    #[serde(default = "default_score_min")]
    pub score_min: f64,
    #[serde(default = "default_score_max")]
    pub score_max: f64,
    #[serde(default = "default_levels")]
    pub levels: Vec<String>,
    #[serde(default = "default_suggestion")]
    pub suggestion: String,
    #[serde(default = "default_capitalize")]
    pub capitalize: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            banner: default_banner(),
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

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            score_min: default_score_min(),
            score_max: default_score_max(),
            levels: default_levels(),
            suggestion: default_suggestion(),
            capitalize: default_capitalize(),
        }
    }
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_banner() -> String {
    "Worddee.ai relay - sentences are scored by the evaluation webhook".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_score_min() -> f64 {
    6.5
}

fn default_score_max() -> f64 {
    9.8
}

fn default_levels() -> Vec<String> {
    vec![
        "Beginner".to_string(),
        "Intermediate".to_string(),
        "Advanced".to_string(),
    ]
}

fn default_suggestion() -> String {
    "Good effort! Keep practicing your English writing.".to_string()
}

fn default_capitalize() -> bool {
    true
}

use crate::{Result, config::WebhookConfig, error::RelayError};
use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Body sent to the evaluation webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebhookPayload {
    pub word: String,
    pub sentence: String,
}

/// A single outbound evaluation call. Implementations make exactly one attempt.
#[async_trait]
pub trait WebhookClient: Send + Sync {
    async fn submit(&self, payload: &WebhookPayload) -> std::result::Result<Value, RelayError>;
}

pub struct HttpWebhookClient {
    client: reqwest::Client,
    url: String,
}

impl HttpWebhookClient {
    pub fn new(config: &WebhookConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        debug!(
            "Creating webhook client for {} (timeout {}s)",
            config.url, config.timeout_secs
        );

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl WebhookClient for HttpWebhookClient {
    async fn submit(&self, payload: &WebhookPayload) -> std::result::Result<Value, RelayError> {
        let response = self
            .client
            .post(&self.url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    RelayError::unavailable(format!("request timed out: {}", e))
                } else {
                    RelayError::unavailable(format!("failed to reach webhook: {}", e))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Webhook answered {}: {}", status, body);
            return Err(RelayError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RelayError::unavailable(format!("failed to read webhook body: {}", e)))?;

        serde_json::from_str(&body).map_err(|e| RelayError::MalformedReply(e.to_string()))
    }
}

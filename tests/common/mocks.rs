use async_trait::async_trait;
use serde_json::Value;
use std::sync::{Arc, Mutex};
use worddee_relay::{
    RelayError,
    webhook::{WebhookClient, WebhookPayload},
};

/// Mock webhook client for testing
#[derive(Debug, Clone)]
pub struct MockWebhookClient {
    pub reply: Result<Value, RelayError>,
    pub requests: Arc<Mutex<Vec<WebhookPayload>>>,
}

impl MockWebhookClient {
    pub fn replying(reply: Value) -> Self {
        Self {
            reply: Ok(reply),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(error: RelayError) -> Self {
        Self {
            reply: Err(error),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_requests(&self) -> Vec<WebhookPayload> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebhookClient for MockWebhookClient {
    async fn submit(&self, payload: &WebhookPayload) -> Result<Value, RelayError> {
        self.requests.lock().unwrap().push(payload.clone());
        self.reply.clone()
    }
}

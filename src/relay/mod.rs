mod fallback;
mod normalize;
mod types;

pub use fallback::{capitalize, synthesize, synthesize_with};
pub use normalize::{ExternalReply, normalize};
pub use types::{Evaluation, EvaluationResult, PlaceholderResult, ValidationRequest};

use crate::{
    config::FallbackConfig,
    error::RelayError,
    webhook::{WebhookClient, WebhookPayload},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Forwards sentences to the evaluation webhook and turns whatever comes
/// back, including nothing at all, into an [`Evaluation`].
pub struct Relay {
    client: Arc<dyn WebhookClient>,
    fallback: FallbackConfig,
}

impl Relay {
    pub fn new(client: Arc<dyn WebhookClient>, fallback: FallbackConfig) -> Self {
        Self { client, fallback }
    }

    /// Scores `sentence`. Fails only with [`RelayError::InvalidInput`], and
    /// does so before contacting the webhook.
    pub async fn evaluate(&self, word: &str, sentence: &str) -> Result<Evaluation, RelayError> {
        let request = ValidationRequest::new(word, sentence)?;

        info!(
            "Evaluating sentence: word='{}' sentence='{}'",
            request.word, request.sentence
        );

        match self.try_evaluate(&request).await {
            Ok(evaluation) => Ok(evaluation),
            Err(error) => self.recover(error, &request),
        }
    }

    async fn try_evaluate(&self, request: &ValidationRequest) -> Result<Evaluation, RelayError> {
        let payload = WebhookPayload {
            word: request.word.clone(),
            sentence: request.sentence.clone(),
        };

        let reply = self.client.submit(&payload).await?;
        debug!("Webhook replied: {}", reply);

        normalize(reply)
    }

    /// Maps a failed evaluation to what the caller receives.
    pub fn recover(
        &self,
        error: RelayError,
        request: &ValidationRequest,
    ) -> Result<Evaluation, RelayError> {
        if error.is_client_error() {
            return Err(error);
        }

        warn!("Falling back to synthesized evaluation: {}", error);
        Ok(Evaluation::Fallback(synthesize(
            &request.sentence,
            &self.fallback,
        )))
    }
}

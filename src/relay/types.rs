use crate::error::RelayError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A sentence to be scored, already trimmed and checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRequest {
    pub word: String,
    pub sentence: String,
}

impl ValidationRequest {
    pub fn new(word: &str, sentence: &str) -> Result<Self, RelayError> {
        let sentence = sentence.trim();
        if sentence.is_empty() {
            return Err(RelayError::InvalidInput);
        }

        Ok(Self {
            word: word.to_string(),
            sentence: sentence.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub score: f64,
    pub level: String,
    pub suggestion: String,
    pub corrected_sentence: String,
}

/// Minimal score returned when the webhook answered but its content was unreadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceholderResult {
    pub score: f64,
    pub level: String,
}

impl Default for PlaceholderResult {
    fn default() -> Self {
        Self {
            score: 8.0,
            level: "Unknown".to_string(),
        }
    }
}

/// What the relay hands back for a sentence.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Evaluation {
    /// Payload produced by the webhook, decoded or passed through verbatim.
    Upstream(Value),
    Placeholder(PlaceholderResult),
    /// Locally synthesized result.
    Fallback(EvaluationResult),
}

impl Evaluation {
    pub fn placeholder() -> Self {
        Self::Placeholder(PlaceholderResult::default())
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

//! Recognizes the shapes the evaluation webhook is known to reply with and
//! flattens them into an [`Evaluation`].

use super::types::Evaluation;
use crate::error::RelayError;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Raw webhook reply, sorted by outer shape.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ExternalReply {
    Sequence(Vec<Value>),
    Object(Map<String, Value>),
    Scalar(Value),
}

impl ExternalReply {
    pub fn decode(raw: &Value) -> Result<Self, serde_json::Error> {
        Self::deserialize(raw)
    }
}

/// Normalizes a webhook reply.
///
/// Returns `Err` only when the reply has no usable shape at all; the caller
/// is expected to substitute a synthesized evaluation in that case.
pub fn normalize(raw: Value) -> Result<Evaluation, RelayError> {
    let reply = match ExternalReply::decode(&raw) {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Could not classify webhook reply, passing it through: {}", e);
            return Ok(Evaluation::Upstream(raw));
        }
    };

    match reply {
        ExternalReply::Sequence(items) => match items.into_iter().next() {
            Some(first) => Ok(from_first_item(first)),
            None => Err(RelayError::shape_mismatch("empty reply list")),
        },
        ExternalReply::Object(map) => Ok(from_object(map)),
        ExternalReply::Scalar(value) => from_scalar(value),
    }
}

fn from_first_item(item: Value) -> Evaluation {
    let content = embedded_content(&item)
        .or_else(|| item.get("output").and_then(Value::as_str))
        .map(str::to_owned);

    match content {
        Some(text) => match decode_content(&text) {
            Some(decoded) => {
                debug!("Decoded evaluation from first list item");
                Evaluation::Upstream(decoded)
            }
            None => {
                warn!("List item content is empty or not JSON, using placeholder score");
                Evaluation::placeholder()
            }
        },
        None => {
            debug!("List item carries no content string, passing it through");
            Evaluation::Upstream(item)
        }
    }
}

fn from_object(map: Map<String, Value>) -> Evaluation {
    let object = Value::Object(map);

    if let Some(text) = embedded_content(&object) {
        if let Some(decoded) = decode_content(text) {
            debug!("Decoded evaluation from message.content");
            return Evaluation::Upstream(decoded);
        }
        warn!("message.content is not JSON, passing the object through");
    }

    Evaluation::Upstream(object)
}

fn from_scalar(value: Value) -> Result<Evaluation, RelayError> {
    match value {
        Value::String(text) => decode_content(&text)
            .map(Evaluation::Upstream)
            .ok_or_else(|| RelayError::shape_mismatch("string reply is not JSON")),
        other => Err(RelayError::shape_mismatch(format!(
            "unexpected scalar reply: {}",
            other
        ))),
    }
}

fn embedded_content(value: &Value) -> Option<&str> {
    value.pointer("/message/content").and_then(Value::as_str)
}

/// Decodes a JSON document embedded in a string. Only objects and arrays count.
fn decode_content(text: &str) -> Option<Value> {
    let text = strip_code_fence(text.trim());
    if text.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(text) {
        Ok(value) if value.is_object() || value.is_array() => Some(value),
        Ok(value) => {
            debug!("Embedded content decoded to a bare scalar: {}", value);
            None
        }
        Err(e) => {
            debug!("Embedded content is not JSON: {}", e);
            None
        }
    }
}

/// Unwraps a Markdown code fence, dropping its info string (e.g. ```` ```json ````).
fn strip_code_fence(text: &str) -> &str {
    let Some(body) = text
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    else {
        return text;
    };

    match body.split_once('\n') {
        Some((_info, inner)) => inner.trim(),
        None => body.trim(),
    }
}

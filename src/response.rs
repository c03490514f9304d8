use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

use crate::error::{Failure, Result};

/// Normalized outcome of one successful request (or one mock).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub content: String,
    pub model_used: String,
    pub elapsed_millis: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tokens: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_per_second: Option<f64>,
}

impl ResultRecord {
    /// Throughput is only derived when there is a token count and a
    /// non-zero elapsed time.
    pub fn new(
        content: String,
        model_used: String,
        elapsed: Duration,
        total_tokens: Option<u64>,
    ) -> Self {
        let elapsed_millis = elapsed.as_millis() as u64;
        let tokens_per_second = total_tokens
            .filter(|_| elapsed_millis > 0)
            .map(|total| total as f64 / (elapsed_millis as f64 / 1000.0));
        Self {
            content,
            model_used,
            elapsed_millis,
            total_tokens,
            tokens_per_second,
        }
    }
}

/// Turn a chat-completions body into a [`ResultRecord`].
///
/// `requested_model` is reported unless the payload names the model that
/// actually served the request.
pub fn normalize(raw: &str, requested_model: &str, elapsed: Duration) -> Result<ResultRecord> {
    let payload: Value = serde_json::from_str(raw)
        .map_err(|e| Failure::MalformedUpstreamPayload(format!("invalid JSON: {e}")))?;

    let content = payload
        .pointer("/choices/0/message/content")
        .ok_or_else(|| Failure::MalformedUpstreamPayload("No content received from AI".to_string()))?
        .as_str()
        .ok_or_else(|| {
            Failure::MalformedUpstreamPayload("message content is not a string".to_string())
        })?
        .to_string();

    let model_used = payload
        .get("model")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(requested_model)
        .to_string();

    let total_tokens = payload
        .pointer("/usage/total_tokens")
        .and_then(Value::as_u64);

    Ok(ResultRecord::new(content, model_used, elapsed, total_tokens))
}

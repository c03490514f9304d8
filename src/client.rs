//! Builds the chat-completions request for a task and turns the reply into a
//! [`ResultRecord`]. Exactly one HTTP call per `submit`, never retried.

use serde_json::{json, Value};
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::error::{Failure, Result};
use crate::models::{ModelDescriptor, ModelRegistry};
use crate::prompt::PromptTable;
use crate::response::{self, ResultRecord};
use crate::task::TaskType;
use crate::transport::{Transport, UreqTransport};

pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Everything that goes into one request. Built fresh per call.
#[derive(Debug)]
pub struct RequestSpec<'a> {
    pub source_text: &'a str,
    pub task: TaskType,
    pub modifier: Option<&'a str>,
    pub model: &'a ModelDescriptor,
}

impl RequestSpec<'_> {
    /// System message first, then the user's text untouched.
    fn body(&self, instruction: &str) -> Value {
        json!({
            "model": self.model.upstream_id,
            "messages": [
                { "role": "system", "content": instruction },
                { "role": "user", "content": self.source_text },
            ],
        })
    }
}

pub struct Client<T> {
    transport: T,
    endpoint: String,
    api_key: Option<String>,
    registry: ModelRegistry,
    prompts: PromptTable,
}

impl Client<UreqTransport> {
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = UreqTransport::new(config.timeout());
        let client = Client::new(transport, config.registry()?, config.prompts()?)
            .with_endpoint(config.endpoint());
        Ok(match config.api_key() {
            Some(key) => client.with_api_key(key),
            None => client,
        })
    }
}

impl<T: Transport> Client<T> {
    pub fn new(transport: T, registry: ModelRegistry, prompts: PromptTable) -> Self {
        Self {
            transport,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            registry,
            prompts,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Blank keys count as missing.
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        self.api_key = Some(key).filter(|k| !k.trim().is_empty());
        self
    }

    /// Send `text` upstream for `task`.
    ///
    /// `model` is a short id from the registry; `None` uses the task's
    /// default model.
    pub fn submit(
        &self,
        text: &str,
        task: TaskType,
        modifier: Option<&str>,
        model: Option<&str>,
    ) -> Result<ResultRecord> {
        let api_key = self.api_key.as_deref().ok_or(Failure::MissingCredential)?;
        if text.trim().is_empty() {
            return Err(Failure::EmptySourceText);
        }

        let instruction = self.prompts.resolve(task, modifier)?;
        let model = match model {
            Some(short_id) => self.registry.describe(short_id)?,
            None => self.registry.default_for(task),
        };
        let spec = RequestSpec {
            source_text: text,
            task,
            modifier,
            model,
        };
        debug!(
            task = %spec.task,
            modifier = spec.modifier.unwrap_or(""),
            model = spec.model.upstream_id,
            "submitting request"
        );
        let body = spec.body(&instruction);

        let started = Instant::now();
        let reply = self.transport.post_json(&self.endpoint, api_key, &body)?;
        let elapsed = started.elapsed();

        if !reply.is_success() {
            warn!(status = reply.status, "upstream returned an error");
            return Err(Failure::Transport {
                status: reply.status,
                body: reply.body,
            });
        }

        let record = response::normalize(&reply.body, spec.model.upstream_id, elapsed)?;
        info!(
            task = %task,
            model = %record.model_used,
            elapsed_ms = record.elapsed_millis,
            "request completed"
        );
        Ok(record)
    }
}

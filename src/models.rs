//! Static table of the OpenRouter models the tool knows about.
//!
//! The table is fixed at build time. Per-task defaults can be overridden from
//! config.toml, but only with short ids from this table.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::{Failure, Result};
use crate::task::TaskType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelDescriptor {
    pub short_id: &'static str,
    pub display_name: &'static str,
    pub upstream_id: &'static str,
    pub supports_extended_reasoning: bool,
}

/// Model used for every task unless config.toml says otherwise.
pub const DEFAULT_MODEL: &str = "amazon-nova-2-lite";

const BUILTIN_MODELS: &[ModelDescriptor] = &[
    ModelDescriptor {
        short_id: "amazon-nova-2-lite",
        display_name: "Amazon Nova 2 Lite V1",
        upstream_id: "amazon/nova-2-lite-v1:free",
        supports_extended_reasoning: false,
    },
    ModelDescriptor {
        short_id: "grok-4.1-fast",
        display_name: "Grok 4.1 Fast",
        upstream_id: "x-ai/grok-4.1-fast:free",
        supports_extended_reasoning: true,
    },
    ModelDescriptor {
        short_id: "gemma-3-27b",
        display_name: "Gemma 3.27b",
        upstream_id: "google/gemma-3-27b-it:free",
        supports_extended_reasoning: false,
    },
    ModelDescriptor {
        short_id: "gemini-2-flash",
        display_name: "Gemini 2.0 Flash",
        upstream_id: "google/gemini-2.0-flash-exp:free",
        supports_extended_reasoning: false,
    },
    ModelDescriptor {
        short_id: "gpt-oss-20b",
        display_name: "GPT OSS 20B",
        upstream_id: "openai/gpt-oss-20b:free",
        supports_extended_reasoning: true,
    },
    ModelDescriptor {
        short_id: "mistral-small-3.1-24b",
        display_name: "Mistral Small 3.1 24B",
        upstream_id: "mistralai/mistral-small-3.1-24b-instruct:free",
        supports_extended_reasoning: false,
    },
    ModelDescriptor {
        short_id: "kimi-k2-0711",
        display_name: "Kimi K2",
        upstream_id: "moonshotai/kimi-k2:free",
        supports_extended_reasoning: false,
    },
];

#[derive(Debug, Clone)]
pub struct ModelRegistry {
    proofread: &'static ModelDescriptor,
    translate: &'static ModelDescriptor,
}

impl ModelRegistry {
    pub fn builtin() -> Self {
        let default = &BUILTIN_MODELS[0];
        Self {
            proofread: default,
            translate: default,
        }
    }

    /// Build a registry whose per-task defaults come from `overrides`.
    /// Tasks missing from the map keep [`DEFAULT_MODEL`].
    pub fn with_defaults(overrides: &BTreeMap<TaskType, String>) -> Result<Self> {
        let mut registry = Self::builtin();
        for (task, short_id) in overrides {
            let model = lookup(short_id)?;
            match task {
                TaskType::Proofread => registry.proofread = model,
                TaskType::Translate => registry.translate = model,
            }
        }
        Ok(registry)
    }

    pub fn describe(&self, short_id: &str) -> Result<&'static ModelDescriptor> {
        lookup(short_id)
    }

    pub fn default_for(&self, task: TaskType) -> &'static ModelDescriptor {
        match task {
            TaskType::Proofread => self.proofread,
            TaskType::Translate => self.translate,
        }
    }

    /// All known models, in table order.
    pub fn list_all(&self) -> &'static [ModelDescriptor] {
        BUILTIN_MODELS
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

fn lookup(short_id: &str) -> Result<&'static ModelDescriptor> {
    let wanted = short_id.trim();
    BUILTIN_MODELS
        .iter()
        .find(|m| m.short_id == wanted)
        .ok_or_else(|| Failure::UnknownModel(wanted.to_string()))
}

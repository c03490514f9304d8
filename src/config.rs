use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::DEFAULT_ENDPOINT;
use crate::error::Failure;
use crate::models::ModelRegistry;
use crate::prompt::PromptTable;
use crate::task::TaskType;

pub const API_KEY_ENV: &str = "OPENROUTER_API_KEY";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub show_stats: bool,
    /// Default model short id per task, keyed by `proofreader` / `translator`.
    #[serde(default)]
    pub models: BTreeMap<String, String>,
    /// System prompt overrides, same keys as `models`.
    #[serde(default)]
    pub prompts: BTreeMap<String, String>,
}

/// Load config from ~/.config/clip-assist/config.toml, or return defaults.
pub fn load() -> Result<Config> {
    load_from(&config_path())
}

pub fn load_from(path: &Path) -> Result<Config> {
    if path.exists() {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    } else {
        Ok(Config::default())
    }
}

impl Config {
    /// `OPENROUTER_API_KEY` wins over the file.
    pub fn api_key(&self) -> Option<String> {
        self.resolve_api_key(std::env::var(API_KEY_ENV).ok())
    }

    fn resolve_api_key(&self, env: Option<String>) -> Option<String> {
        env.into_iter()
            .chain(self.api_key.clone())
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .unwrap_or(DEFAULT_ENDPOINT)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.filter(|s| *s > 0).map(Duration::from_secs)
    }

    pub fn registry(&self) -> Result<ModelRegistry, Failure> {
        ModelRegistry::with_defaults(&by_task(&self.models)?)
    }

    pub fn prompts(&self) -> Result<PromptTable, Failure> {
        Ok(PromptTable::with_overrides(&by_task(&self.prompts)?))
    }
}

fn by_task(table: &BTreeMap<String, String>) -> Result<BTreeMap<TaskType, String>, Failure> {
    table
        .iter()
        .map(|(key, value)| key.parse::<TaskType>().map(|task| (task, value.clone())))
        .collect()
}

fn config_path() -> PathBuf {
    dirs_config_dir().join("clip-assist").join("config.toml")
}

fn dirs_config_dir() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        })
}

//! Diagnostics: `clip-assist models` and `clip-assist prompt`.

use anyhow::Result;

use crate::config::Config;
use crate::models::{ModelDescriptor, ModelRegistry};
use crate::task::TaskType;

pub fn models(config: &Config) -> Result<()> {
    let registry = config.registry()?;
    for model in registry.list_all() {
        println!("{}", model_line(model, &registry));
    }
    Ok(())
}

/// Print the system prompt a request would carry, without sending anything.
pub fn prompt(task: TaskType, modifier: Option<&str>, config: &Config) -> Result<()> {
    let instruction = config.prompts()?.resolve(task, modifier)?;
    println!("{instruction}");
    Ok(())
}

fn model_line(model: &ModelDescriptor, registry: &ModelRegistry) -> String {
    let mut line = format!(
        "{:<24} {:<48} {}",
        model.short_id, model.upstream_id, model.display_name
    );
    if model.supports_extended_reasoning {
        line.push_str(" [thinking]");
    }
    let defaults: Vec<&str> = TaskType::ALL
        .into_iter()
        .filter(|task| registry.default_for(*task).short_id == model.short_id)
        .map(TaskType::as_str)
        .collect();
    if !defaults.is_empty() {
        line.push_str(&format!(" (default: {})", defaults.join(", ")));
    }
    line
}

//! System instructions sent ahead of the user's text.
//!
//! Each task type registers a base template and the way a modifier (style,
//! target language) is folded into it. Adding a task type means registering
//! another entry; `resolve` itself does not change.

use std::collections::BTreeMap;
use tracing::debug;

use crate::error::{Failure, Result};
use crate::task::TaskType;

const PROOFREADER_PROMPT: &str = "You are a meticulous proofreader. Correct spelling, grammar and \
punctuation in the user's text while keeping its meaning, tone and formatting. Reply with the \
corrected text only, without explanations or quotation marks.";

const TRANSLATOR_PROMPT: &str = "You are a professional translator. Translate the user's text \
faithfully, keeping its meaning, tone and formatting. If no target language is given, translate \
into English. Reply with the translation only, without explanations or quotation marks.";

/// How a modifier is appended to a task's base template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierFormat {
    /// Appends `" {label}: {modifier}."`.
    Labeled(&'static str),
    /// Appends `" {modifier}"` as-is.
    #[allow(dead_code)]
    Verbatim,
    /// Any modifier is an error.
    #[allow(dead_code)]
    Reject,
}

#[derive(Debug, Clone)]
pub struct PromptEntry {
    pub template: String,
    pub modifier: ModifierFormat,
}

#[derive(Debug, Clone, Default)]
pub struct PromptTable {
    entries: BTreeMap<TaskType, PromptEntry>,
}

impl PromptTable {
    /// The built-in proofreader and translator prompts.
    pub fn builtin() -> Self {
        let mut table = Self::default();
        table.register(
            TaskType::Proofread,
            PROOFREADER_PROMPT,
            ModifierFormat::Labeled("Style"),
        );
        table.register(
            TaskType::Translate,
            TRANSLATOR_PROMPT,
            ModifierFormat::Labeled("Target language"),
        );
        table
    }

    /// Built-in table with templates replaced from config. The modifier
    /// format of a task is never overridden.
    pub fn with_overrides(overrides: &BTreeMap<TaskType, String>) -> Self {
        let mut table = Self::builtin();
        for (task, template) in overrides {
            if let Some(entry) = table.entries.get_mut(task) {
                entry.template = template.clone();
            }
        }
        table
    }

    pub fn register(
        &mut self,
        task: TaskType,
        template: impl Into<String>,
        modifier: ModifierFormat,
    ) -> &mut Self {
        self.entries.insert(
            task,
            PromptEntry {
                template: template.into(),
                modifier,
            },
        );
        self
    }

    /// Final system instruction for `task`. A blank modifier counts as absent.
    pub fn resolve(&self, task: TaskType, modifier: Option<&str>) -> Result<String> {
        let entry = self
            .entries
            .get(&task)
            .ok_or_else(|| Failure::UnknownTaskType(task.to_string()))?;

        if entry.template.trim().is_empty() {
            return Err(Failure::EmptyUpstreamPrompt(task.to_string()));
        }

        let mut instruction = entry.template.clone();
        if let Some(modifier) = modifier.map(str::trim).filter(|m| !m.is_empty()) {
            match entry.modifier {
                ModifierFormat::Labeled(label) => {
                    instruction.push_str(&format!(" {label}: {modifier}."));
                }
                ModifierFormat::Verbatim => {
                    instruction.push(' ');
                    instruction.push_str(modifier);
                }
                ModifierFormat::Reject => {
                    return Err(Failure::ModifierRejected(task.to_string()));
                }
            }
        }

        debug!(task = %task, chars = instruction.len(), "resolved system prompt");
        Ok(instruction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proofread_style_suffix() {
        let table = PromptTable::builtin();
        let out = table.resolve(TaskType::Proofread, Some("professional")).unwrap();
        assert!(out.starts_with(PROOFREADER_PROMPT));
        assert!(out.ends_with(" Style: professional."));
    }

    #[test]
    fn translate_language_suffix() {
        let table = PromptTable::builtin();
        let out = table.resolve(TaskType::Translate, Some("German")).unwrap();
        assert!(out.starts_with(TRANSLATOR_PROMPT));
        assert!(out.ends_with(" Target language: German."));
    }

    #[test]
    fn all_known_combinations_keep_template_prefix() {
        let table = PromptTable::builtin();
        let cases = [
            (TaskType::Proofread, "professional", " Style: professional."),
            (TaskType::Proofread, "casual", " Style: casual."),
            (TaskType::Proofread, "pirate", " Style: pirate."),
            (TaskType::Translate, "English", " Target language: English."),
            (TaskType::Translate, "French", " Target language: French."),
            (TaskType::Translate, "Spanish", " Target language: Spanish."),
            (TaskType::Translate, "Italian", " Target language: Italian."),
            (TaskType::Translate, "NL", " Target language: NL."),
        ];
        for (task, modifier, suffix) in cases {
            let base = table.resolve(task, None).unwrap();
            let out = table.resolve(task, Some(modifier)).unwrap();
            assert_eq!(out, format!("{base}{suffix}"));
        }
    }

    #[test]
    fn no_modifier_is_bare_template() {
        let table = PromptTable::builtin();
        assert_eq!(
            table.resolve(TaskType::Translate, None).unwrap(),
            TRANSLATOR_PROMPT
        );
        assert_eq!(
            table.resolve(TaskType::Translate, Some("   ")).unwrap(),
            TRANSLATOR_PROMPT
        );
    }

    #[test]
    fn empty_template_fails() {
        let overrides = BTreeMap::from([(TaskType::Proofread, "  \n".to_string())]);
        let table = PromptTable::with_overrides(&overrides);
        let err = table.resolve(TaskType::Proofread, Some("casual")).unwrap_err();
        assert_eq!(err, Failure::EmptyUpstreamPrompt("proofreader".to_string()));
    }

    #[test]
    fn unregistered_task_fails() {
        let table = PromptTable::default();
        let err = table.resolve(TaskType::Translate, None).unwrap_err();
        assert_eq!(err, Failure::UnknownTaskType("translator".to_string()));
    }

    #[test]
    fn override_replaces_template_only() {
        let overrides = BTreeMap::from([(TaskType::Translate, "Translate.".to_string())]);
        let table = PromptTable::with_overrides(&overrides);
        assert_eq!(
            table.resolve(TaskType::Translate, Some("German")).unwrap(),
            "Translate. Target language: German."
        );
    }

    #[test]
    fn verbatim_and_reject_formats() {
        let mut table = PromptTable::default();
        table.register(TaskType::Proofread, "Fix it.", ModifierFormat::Verbatim);
        table.register(TaskType::Translate, "Translate.", ModifierFormat::Reject);

        assert_eq!(
            table.resolve(TaskType::Proofread, Some("Keep it short.")).unwrap(),
            "Fix it. Keep it short."
        );
        assert_eq!(
            table.resolve(TaskType::Translate, Some("German")).unwrap_err(),
            Failure::ModifierRejected("translator".to_string())
        );
        assert_eq!(table.resolve(TaskType::Translate, None).unwrap(), "Translate.");
    }
}

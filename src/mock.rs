//! Offline stand-in for [`Client::submit`](crate::client::Client::submit).
//!
//! Produces a record with the same shape as a real response so the CLI and
//! tests can run without an API key or network. Only `--mock` and tests
//! reach this module.

use std::time::Duration;
use uuid::Uuid;

use crate::models::ModelRegistry;
use crate::response::ResultRecord;
use crate::task::TaskType;

const CORRECTIONS: [&str; 4] = [
    "Fixed grammar issues",
    "Corrected spelling errors",
    "Improved sentence structure",
    "Enhanced readability",
];

/// Source of pseudo-random numbers for simulated timings and phrasing.
pub trait Entropy {
    fn next_u32(&mut self) -> u32;
}

/// Draws from fresh v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidEntropy;

impl Entropy for UuidEntropy {
    fn next_u32(&mut self) -> u32 {
        Uuid::new_v4().as_u128() as u32
    }
}

pub struct MockResponder<'a, E> {
    registry: &'a ModelRegistry,
    entropy: E,
}

impl<'a, E: Entropy> MockResponder<'a, E> {
    pub fn new(registry: &'a ModelRegistry, entropy: E) -> Self {
        Self { registry, entropy }
    }

    pub fn mock(&mut self, text: &str, task: TaskType, modifier: Option<&str>) -> ResultRecord {
        let modifier = modifier.map(str::trim).filter(|m| !m.is_empty());
        let content = match task {
            TaskType::Translate => mock_translation(text, modifier.unwrap_or("English")),
            TaskType::Proofread => {
                let correction = CORRECTIONS[self.entropy.next_u32() as usize % CORRECTIONS.len()];
                mock_proofreading(text, modifier, correction)
            }
        };

        // 100-499 ms
        let elapsed = Duration::from_millis(100 + u64::from(self.entropy.next_u32() % 400));
        let total_tokens = estimate_tokens(text);
        let model = self.registry.default_for(task);

        ResultRecord::new(
            content,
            model.upstream_id.to_string(),
            elapsed,
            Some(total_tokens),
        )
    }
}

/// Rough token count: a quarter of the character count, at least 10.
pub fn estimate_tokens(text: &str) -> u64 {
    ((text.chars().count() / 4) as u64).max(10)
}

fn mock_translation(text: &str, language: &str) -> String {
    match language {
        "English" => format!(
            "This is a mock translation of \"{text}\" to English. The original text was: \"{text}\""
        ),
        "German" => format!(
            "Dies ist eine Mock-Übersetzung von \"{text}\" ins Deutsche. Der Originaltext lautete: \"{text}\""
        ),
        "French" => format!(
            "Ceci est une traduction simulée de \"{text}\" en français. Le texte original était : \"{text}\""
        ),
        "Spanish" => format!(
            "Esta es una traducción simulada de \"{text}\" al español. El texto original era: \"{text}\""
        ),
        "Italian" => format!(
            "Questa è una traduzione simulata di \"{text}\" in italiano. Il testo originale era: \"{text}\""
        ),
        other => format!("Mock translation of \"{text}\" to {other}. Original: \"{text}\""),
    }
}

fn mock_proofreading(text: &str, style: Option<&str>, correction: &str) -> String {
    let style_suffix = style.map(|s| format!(" in {s} style")).unwrap_or_default();
    format!(
        "Mock proofread{style_suffix}: \"{text}\" - {correction}. The corrected version would be: \"{text}\""
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Replays a fixed sequence, wrapping around.
    struct Fixed {
        values: Vec<u32>,
        next: usize,
    }

    impl Fixed {
        fn new(values: &[u32]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl Entropy for Fixed {
        fn next_u32(&mut self) -> u32 {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            value
        }
    }

    #[test]
    fn german_translation_quotes_source() {
        let registry = ModelRegistry::builtin();
        let mut responder = MockResponder::new(&registry, Fixed::new(&[0]));
        let record = responder.mock("Good morning", TaskType::Translate, Some("German"));

        assert!(record.content.contains("Good morning"));
        assert!(record.content.starts_with("Dies ist eine Mock-Übersetzung von"));
        assert!(record.content.contains("ins Deutsche"));
        assert_eq!(
            record.model_used,
            registry.default_for(TaskType::Translate).upstream_id
        );
    }

    #[test]
    fn translation_defaults_to_english() {
        let registry = ModelRegistry::builtin();
        let mut responder = MockResponder::new(&registry, Fixed::new(&[0]));
        let record = responder.mock("Hallo", TaskType::Translate, None);
        assert!(record.content.contains("to English"));
    }

    #[test]
    fn unknown_language_uses_generic_phrase() {
        let registry = ModelRegistry::builtin();
        let mut responder = MockResponder::new(&registry, Fixed::new(&[0]));
        let record = responder.mock("Hello", TaskType::Translate, Some("Dutch"));
        assert_eq!(
            record.content,
            "Mock translation of \"Hello\" to Dutch. Original: \"Hello\""
        );
    }

    #[test]
    fn proofread_uses_style_and_entropy() {
        let registry = ModelRegistry::builtin();
        let mut responder = MockResponder::new(&registry, Fixed::new(&[1, 150]));
        let record = responder.mock("Helo wrold", TaskType::Proofread, Some("casual"));

        assert_eq!(
            record.content,
            "Mock proofread in casual style: \"Helo wrold\" - Corrected spelling errors. \
             The corrected version would be: \"Helo wrold\""
        );
        assert_eq!(record.elapsed_millis, 250);
    }

    #[test]
    fn proofread_without_style() {
        let registry = ModelRegistry::builtin();
        let mut responder = MockResponder::new(&registry, Fixed::new(&[3, 0]));
        let record = responder.mock("text", TaskType::Proofread, None);
        assert!(record.content.starts_with("Mock proofread: \"text\" - Enhanced readability."));
        assert_eq!(record.elapsed_millis, 100);
    }

    #[test]
    fn token_estimate_has_floor() {
        assert_eq!(estimate_tokens(""), 10);
        assert_eq!(estimate_tokens("short"), 10);
        assert_eq!(estimate_tokens(&"a".repeat(400)), 100);
        assert_eq!(estimate_tokens(&"a".repeat(43)), 10);
        assert_eq!(estimate_tokens(&"a".repeat(47)), 11);
    }

    #[test]
    fn uuid_entropy_stays_in_range() {
        let registry = ModelRegistry::builtin();
        let mut responder = MockResponder::new(&registry, UuidEntropy);
        for _ in 0..50 {
            let record = responder.mock("some text", TaskType::Proofread, None);
            assert!((100..500).contains(&record.elapsed_millis));
        }
    }

    proptest! {
        #[test]
        fn stats_follow_formula(text in ".{0,400}", seed in any::<u32>(), translate in any::<bool>()) {
            let registry = ModelRegistry::builtin();
            let mut responder = MockResponder::new(&registry, Fixed::new(&[seed, seed.rotate_left(7)]));
            let task = if translate { TaskType::Translate } else { TaskType::Proofread };
            let record = responder.mock(&text, task, None);

            let expected_tokens = ((text.chars().count() / 4) as u64).max(10);
            prop_assert_eq!(record.total_tokens, Some(expected_tokens));
            prop_assert!((100..500).contains(&record.elapsed_millis));
            let expected_rate = expected_tokens as f64 / (record.elapsed_millis as f64 / 1000.0);
            prop_assert_eq!(record.tokens_per_second, Some(expected_rate));
            prop_assert!(record.content.contains(&text));
        }
    }
}

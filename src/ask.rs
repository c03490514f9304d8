//! `clip-assist proofread` / `clip-assist translate`.

use anyhow::Result;

use crate::client::Client;
use crate::clipboard;
use crate::config::Config;
use crate::mock::{MockResponder, UuidEntropy};
use crate::response::ResultRecord;
use crate::task::TaskType;

#[derive(Debug, Default)]
pub struct Options<'a> {
    /// Text to process; the clipboard is read when absent.
    pub text: Option<&'a str>,
    /// Style for proofreading, target language for translation.
    pub modifier: Option<&'a str>,
    pub model: Option<&'a str>,
    pub mock: bool,
    pub copy: bool,
    pub json: bool,
    pub stats: bool,
}

pub fn run(task: TaskType, opts: &Options, config: &Config) -> Result<()> {
    let text = match opts.text {
        Some(text) => text.to_string(),
        None => clipboard::read_text()?,
    };

    let record = if opts.mock {
        let registry = config.registry()?;
        if let Some(short_id) = opts.model {
            registry.describe(short_id)?;
        }
        eprintln!("{} (mock)", progress_message(task, opts.modifier));
        MockResponder::new(&registry, UuidEntropy).mock(&text, task, opts.modifier)
    } else {
        let client = Client::from_config(config)?;
        eprintln!("{}", progress_message(task, opts.modifier));
        client.submit(&text, task, opts.modifier, opts.model)?
    };

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", record.content);
    }

    if opts.stats || config.show_stats {
        for line in stats_lines(&record) {
            eprintln!("{line}");
        }
    }

    if opts.copy {
        clipboard::copy_text(&record.content)?;
        eprintln!("Copied result to clipboard.");
    }

    Ok(())
}

fn progress_message(task: TaskType, modifier: Option<&str>) -> String {
    let modifier = modifier.map(str::trim).filter(|m| !m.is_empty());
    match (task, modifier) {
        (TaskType::Proofread, Some(style)) => format!("Proofreading ({style})..."),
        (TaskType::Proofread, None) => "Proofreading...".to_string(),
        (TaskType::Translate, Some(language)) => format!("Translating to {language}..."),
        (TaskType::Translate, None) => "Translating...".to_string(),
    }
}

/// Model, request time and token figures. Token lines are skipped when the
/// record has no counts.
fn stats_lines(record: &ResultRecord) -> Vec<String> {
    let mut lines = vec![
        format!("Model: {}", record.model_used),
        format!("Request Time: {:.2}s", record.elapsed_millis as f64 / 1000.0),
    ];
    if let Some(total) = record.total_tokens {
        lines.push(format!("Total Tokens: {total}"));
    }
    if let Some(rate) = record.tokens_per_second {
        lines.push(format!("Tokens / Sec: {rate:.1}"));
    }
    lines
}

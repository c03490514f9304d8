mod ask;
mod client;
mod clipboard;
mod config;
mod error;
mod inspect;
mod mock;
mod models;
mod prompt;
mod response;
mod task;
mod transport;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::task::TaskType;

#[derive(Parser)]
#[command(
    name = "clip-assist",
    version,
    about = "Proofread or translate clipboard text with an LLM"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Proofread text and print the corrected version
    Proofread {
        /// Writing style (e.g. professional, casual)
        #[arg(long)]
        style: Option<String>,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Translate text into another language
    Translate {
        /// Target language (e.g. English, German, French, Spanish, Italian)
        #[arg(long, short = 'l')]
        language: Option<String>,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Print the system prompt a request would use, without sending it
    Prompt {
        /// Task type: proofreader or translator
        task: TaskType,
        /// Style or target language
        #[arg(long)]
        modifier: Option<String>,
    },
    /// List known models and the per-task defaults
    Models,
}

#[derive(Args)]
struct CommonArgs {
    /// Text to process (defaults to the clipboard)
    #[arg(long, short = 't')]
    text: Option<String>,
    /// Model short id override (see `clip-assist models`)
    #[arg(long)]
    model: Option<String>,
    /// Return a canned response without calling the API
    #[arg(long)]
    mock: bool,
    /// Copy the result to the clipboard
    #[arg(long)]
    copy: bool,
    /// Print the full result record as JSON
    #[arg(long)]
    json: bool,
    /// Print model, timing and token stats to stderr
    #[arg(long)]
    stats: bool,
}

impl CommonArgs {
    fn options<'a>(&'a self, modifier: Option<&'a str>) -> ask::Options<'a> {
        ask::Options {
            text: self.text.as_deref(),
            modifier,
            model: self.model.as_deref(),
            mock: self.mock,
            copy: self.copy,
            json: self.json,
            stats: self.stats,
        }
    }
}

fn init_logging() {
    // stdout carries the result; logs go to stderr.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let config = config::load()?;

    match cli.command {
        Commands::Proofread { style, common } => ask::run(
            TaskType::Proofread,
            &common.options(style.as_deref()),
            &config,
        ),
        Commands::Translate { language, common } => ask::run(
            TaskType::Translate,
            &common.options(language.as_deref()),
            &config,
        ),
        Commands::Prompt { task, modifier } => inspect::prompt(task, modifier.as_deref(), &config),
        Commands::Models => inspect::models(&config),
    }
}

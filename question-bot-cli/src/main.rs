//! CLI entry point for question-bot

mod listeners;
mod terminal;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use listeners::{QuestionListener, TranscriptListener, HELP_TEXT};
use question_bot_core::config::{Config, ConfigLoader};
use question_bot_core::logging::init_logging;
use question_bot_core::{InMemoryStore, MessageEmitter, RecordStore, EXIT_COMMAND};
use std::path::PathBuf;
use std::sync::Arc;
use terminal::StdConsole;
use tracing::info;

#[derive(Parser)]
#[command(name = "question-bot")]
#[command(about = "Log questions and their answers from the console")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration directory
    #[arg(short, long, global = true)]
    config_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive question loop (default)
    Run,
    /// Write a default configuration file
    Init {
        /// Overwrite an existing configuration
        #[arg(short, long)]
        force: bool,
    },
    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_loader = match cli.config_dir {
        Some(dir) => ConfigLoader::with_dir(dir),
        None => ConfigLoader::new(),
    };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_bot(&config_loader),
        Commands::Init { force } => run_init(&config_loader, force),
        Commands::Config => run_show_config(&config_loader),
    }
}

fn run_bot(loader: &ConfigLoader) -> Result<()> {
    let config = loader.load().context("failed to load configuration")?;
    let _log_guard = init_logging(&config.logging);
    info!(config_dir = %loader.config_dir().display(), "Starting question bot");

    println!("{}", console::style(&config.bot.greeting).bold().green());
    if config.bot.show_help_on_start {
        println!("{}", console::style(HELP_TEXT).dim());
    }

    let store: Arc<dyn RecordStore> = Arc::new(InMemoryStore::new());
    let mut emitter = MessageEmitter::new(StdConsole::stdio());
    emitter.subscribe(TranscriptListener::default());
    emitter.subscribe(QuestionListener::new(store.clone()));

    emitter.start().context("console loop failed")?;

    let total = store.len();
    let answered = store.records().iter().filter(|r| r.is_answered()).count();
    info!(total, answered, "Question bot finished");
    println!(
        "Goodbye! {} question(s) logged, {} answered.",
        total, answered
    );
    Ok(())
}

fn run_init(loader: &ConfigLoader, force: bool) -> Result<()> {
    let path = loader.config_path();
    if path.exists() && !force {
        println!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
        return Ok(());
    }

    loader
        .save(&Config::default())
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("{} {}", console::style("Wrote").green(), path.display());
    println!("Type {} to leave the bot.", EXIT_COMMAND);
    Ok(())
}

fn run_show_config(loader: &ConfigLoader) -> Result<()> {
    let config = loader.load().context("failed to load configuration")?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

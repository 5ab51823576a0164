//! Moodline CLI
//!
//! Scores individual messages and produces end-of-conversation sentiment
//! reports from transcript files.

use anyhow::Result;
use clap::Parser;
use moodline_sentiment::{SentimentConfig, SentimentEngine, StrategySpec};
use tracing::info;

mod cli;
mod transcript;

use cli::{Cli, Commands, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let engine = SentimentEngine::from_config(&config);

    match cli.command {
        Commands::Analyze { text } => {
            let text = text.join(" ");
            let result = engine.analyze(&text);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Report { transcript, format } => {
            let turns = transcript::load_turns(&transcript)?;
            info!("Loaded {} turns from {}", turns.len(), transcript.display());

            let report = engine.conversation_sentiment(&turns);
            match format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
                OutputFormat::Text => print!("{}", transcript::render_text(&report)),
            }
        }
    }

    Ok(())
}

/// Load configuration from file and CLI overrides
fn load_config(cli: &Cli) -> Result<SentimentConfig> {
    let mut config = if cli.config.exists() {
        info!("Loading configuration from {}", cli.config.display());
        SentimentConfig::from_file(&cli.config)?
    } else {
        SentimentConfig::default()
    };

    if let Some(lexicon) = &cli.lexicon {
        config = config.with_lexicon_path(lexicon);
    }

    if cli.keyword_only {
        config = config.with_strategy(StrategySpec::Keyword);
    }

    Ok(config)
}

/// Initialize tracing/logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("moodline=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("moodline=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

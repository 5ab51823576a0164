use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodline")]
#[command(author, version, about = "Score chat messages and report conversation sentiment")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, default_value = "moodline.yaml")]
    pub config: PathBuf,

    /// Local lexicon file (overrides the configured source)
    #[arg(short, long, global = true, env = "MOODLINE_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Skip the lexicon and score with keyword counting
    #[arg(long, global = true)]
    pub keyword_only: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a single message
    Analyze {
        /// Message text (words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Report on a conversation transcript (JSON or YAML list of turns)
    Report {
        /// Transcript file
        transcript: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

//! Moodline Sentiment
//!
//! Sentiment scoring for chat messages and end-of-conversation reports.
//!
//! Two interchangeable polarity models implement [`PolarityModel`]:
//! - [`VaderAnalyzer`]: VADER lexicon scoring (preferred)
//! - [`KeywordPolarity`]: keyword counting, used when the analyzer cannot be initialized
//!
//! [`SentimentEngine`] picks one at construction and never fails while
//! scoring. [`analyze_text`] and [`conversation_sentiment`] use a shared
//! engine that is built once per process.

pub mod analyzer;
pub mod config;
pub mod engine;
pub mod global;
pub mod keyword;
pub mod lexicon;
pub mod polarity;
pub mod vader;

pub use analyzer::AnalyzerHandle;
pub use config::{LexiconConfig, SentimentConfig, StrategySpec};
pub use engine::SentimentEngine;
pub use global::{analyze_text, conversation_sentiment, global, init_global, SharedEngine};
pub use keyword::KeywordPolarity;
pub use lexicon::{HubRepoType, Lexicon, LexiconSource};
pub use polarity::{PolarityModel, PolarityScores};
pub use vader::VaderAnalyzer;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::engine::SentimentEngine;
    pub use crate::global::{analyze_text, conversation_sentiment};
    pub use crate::polarity::{PolarityModel, PolarityScores};
    pub use moodline_core::prelude::*;
}

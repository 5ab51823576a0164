//! Moodline Core
//!
//! Core types shared across Moodline components.
//!
//! This crate provides:
//! - Chat turn and conversation types consumed by the sentiment engine
//! - Sentiment result and conversation report value types
//! - The label classifier that maps compound scores to discrete labels
//! - Error types and result handling

pub mod error;
pub mod label;
pub mod types;

pub use error::{Error, Result};
pub use label::{label_for, NEGATIVE_THRESHOLD, POSITIVE_THRESHOLD};
pub use types::{
    ChatTurn, Conversation, ConversationReport, MessageSentiment, OverallSentiment, Role,
    SentimentLabel, SentimentResult, Trend,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::label::label_for;
    pub use crate::types::{
        ChatTurn, Conversation, ConversationReport, Role, SentimentLabel, SentimentResult, Trend,
    };
}

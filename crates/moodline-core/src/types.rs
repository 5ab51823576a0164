//! Core types for Moodline

use crate::label::label_for;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Difference between the first and last message compound that counts as a trend
pub const TREND_THRESHOLD: f64 = 0.2;

/// Author of a chat turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Message typed by the person in the conversation
    User,
    /// Reply produced by the chat backend
    #[serde(alias = "assistant")]
    Bot,
}

/// A single turn in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    /// Who wrote this turn
    pub role: Role,

    /// Raw text of the turn
    pub text: String,

    /// When the turn was appended (if known)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ChatTurn {
    /// Create a new turn without a timestamp
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: None,
        }
    }

    /// Create a user turn
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Role::User, text)
    }

    /// Create a bot turn
    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(Role::Bot, text)
    }

    /// Attach a timestamp
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Whether this turn was authored by the user
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

/// Ordered chat history for one conversation.
///
/// Turns are append-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    turns: Vec<ChatTurn>,
}

impl Conversation {
    /// Create an empty conversation
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn
    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    /// Append a user turn stamped with the current time
    pub fn push_user(&mut self, text: impl Into<String>) {
        self.push(ChatTurn::user(text).with_timestamp(Utc::now()));
    }

    /// Append a bot turn stamped with the current time
    pub fn push_bot(&mut self, text: impl Into<String>) {
        self.push(ChatTurn::bot(text).with_timestamp(Utc::now()));
    }

    /// All turns in order
    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    /// Texts of user turns in order
    pub fn user_texts(&self) -> impl Iterator<Item = &str> {
        self.turns
            .iter()
            .filter(|turn| turn.is_user())
            .map(|turn| turn.text.as_str())
    }

    /// Number of turns
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether no turns have been appended
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Consume the conversation, returning its turns
    pub fn into_turns(self) -> Vec<ChatTurn> {
        self.turns
    }
}

impl From<Vec<ChatTurn>> for Conversation {
    fn from(turns: Vec<ChatTurn>) -> Self {
        Self { turns }
    }
}

/// Discrete sentiment label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Label name as displayed to users
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Result of scoring a single text.
///
/// The label is always derived from the compound score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentResult {
    compound: f64,
    label: SentimentLabel,
    scores: BTreeMap<String, f64>,
}

impl SentimentResult {
    /// Result for blank input
    pub fn neutral() -> Self {
        Self::from_compound(0.0, BTreeMap::new())
    }

    /// Build a result from a compound score and optional sub-scores
    pub fn from_compound(compound: f64, scores: BTreeMap<String, f64>) -> Self {
        Self {
            compound,
            label: label_for(compound),
            scores,
        }
    }

    /// Continuous polarity in [-1, 1]
    pub fn compound(&self) -> f64 {
        self.compound
    }

    /// Discrete label for the compound score
    pub fn label(&self) -> SentimentLabel {
        self.label
    }

    /// Sub-scores reported by the polarity model (empty for the keyword fallback)
    pub fn scores(&self) -> &BTreeMap<String, f64> {
        &self.scores
    }
}

/// Score of one user message inside a conversation report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageSentiment {
    text: String,
    compound: f64,
    label: SentimentLabel,
}

impl MessageSentiment {
    /// Record the score for a message
    pub fn new(text: impl Into<String>, result: &SentimentResult) -> Self {
        Self {
            text: text.into(),
            compound: result.compound(),
            label: result.label(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn compound(&self) -> f64 {
        self.compound
    }

    pub fn label(&self) -> SentimentLabel {
        self.label
    }
}

/// Mean sentiment across a conversation
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OverallSentiment {
    compound: f64,
    label: SentimentLabel,
}

impl OverallSentiment {
    /// Build from a mean compound score
    pub fn from_compound(compound: f64) -> Self {
        Self {
            compound,
            label: label_for(compound),
        }
    }

    pub fn compound(&self) -> f64 {
        self.compound
    }

    pub fn label(&self) -> SentimentLabel {
        self.label
    }
}

/// Direction sentiment moved between the first and last user message
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Worsening,
    #[default]
    Stable,
}

impl Trend {
    /// Classify movement from the first to the last compound score.
    ///
    /// Only the endpoints matter; intermediate messages are ignored.
    pub fn between(first: f64, last: f64) -> Self {
        if last - first > TREND_THRESHOLD {
            Self::Improving
        } else if first - last > TREND_THRESHOLD {
            Self::Worsening
        } else {
            Self::Stable
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Improving => "improving",
            Self::Worsening => "worsening",
            Self::Stable => "stable",
        }
    }
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// End-of-conversation sentiment report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationReport {
    overall: OverallSentiment,
    per_message: Vec<MessageSentiment>,
    trend: Trend,
}

impl ConversationReport {
    /// Fold per-message scores into a report.
    ///
    /// An empty slice yields a neutral, stable report with a 0.0 mean.
    pub fn from_messages(per_message: Vec<MessageSentiment>) -> Self {
        let mean = if per_message.is_empty() {
            0.0
        } else {
            per_message.iter().map(MessageSentiment::compound).sum::<f64>()
                / per_message.len() as f64
        };

        let trend = match (per_message.first(), per_message.last()) {
            (Some(first), Some(last)) => Trend::between(first.compound(), last.compound()),
            _ => Trend::Stable,
        };

        Self {
            overall: OverallSentiment::from_compound(mean),
            per_message,
            trend,
        }
    }

    /// Report for a conversation with no user messages
    pub fn empty() -> Self {
        Self::from_messages(Vec::new())
    }

    pub fn overall(&self) -> OverallSentiment {
        self.overall
    }

    /// Per-message scores in conversation order
    pub fn per_message(&self) -> &[MessageSentiment] {
        &self.per_message
    }

    pub fn trend(&self) -> Trend {
        self.trend
    }
}

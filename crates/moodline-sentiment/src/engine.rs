//! Sentiment engine: message scoring and conversation aggregation

use crate::analyzer::AnalyzerHandle;
use crate::config::{SentimentConfig, StrategySpec};
use crate::keyword::KeywordPolarity;
use crate::polarity::PolarityModel;
use moodline_core::{
    ChatTurn, Conversation, ConversationReport, MessageSentiment, SentimentResult,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Scores messages and builds conversation reports.
///
/// The polarity model is chosen once at construction. Scoring never
/// fails: if the lexicon analyzer cannot be initialized the engine uses
/// keyword counting for its whole lifetime.
#[derive(Clone)]
pub struct SentimentEngine {
    model: Arc<dyn PolarityModel>,
}

impl SentimentEngine {
    /// Build an engine from configuration
    pub fn from_config(config: &SentimentConfig) -> Self {
        let engine = match config.strategy {
            StrategySpec::Keyword => Self::keyword(),
            StrategySpec::Auto => match AnalyzerHandle::initialize(&config.lexicon) {
                Ok(handle) => Self::with_model(handle.model()),
                Err(e) => {
                    warn!("Lexicon analyzer unavailable, using keyword scoring: {}", e);
                    metrics::counter!("moodline_primary_unavailable_total").increment(1);
                    Self::keyword()
                }
            },
        };

        info!("Sentiment engine using {} strategy", engine.strategy());
        engine
    }

    /// Engine backed by keyword counting
    pub fn keyword() -> Self {
        Self::with_model(Arc::new(KeywordPolarity::new()))
    }

    /// Engine backed by an arbitrary polarity model
    pub fn with_model(model: Arc<dyn PolarityModel>) -> Self {
        Self { model }
    }

    /// Name of the active polarity model
    pub fn strategy(&self) -> &'static str {
        self.model.name()
    }

    /// Score a single text.
    ///
    /// Empty text is neutral and never reaches the polarity model.
    pub fn analyze(&self, text: &str) -> SentimentResult {
        if text.is_empty() {
            return SentimentResult::neutral();
        }

        let scores = self.model.score(text);
        metrics::counter!("moodline_messages_scored_total", "strategy" => self.strategy())
            .increment(1);

        SentimentResult::from_compound(scores.compound, scores.subscores)
    }

    /// Score every user turn and fold the results into a report.
    ///
    /// Bot turns are skipped. Per-message order follows the input.
    pub fn conversation_sentiment<'a, I>(&self, turns: I) -> ConversationReport
    where
        I: IntoIterator<Item = &'a ChatTurn>,
    {
        let per_message: Vec<MessageSentiment> = turns
            .into_iter()
            .filter(|turn| turn.is_user())
            .map(|turn| MessageSentiment::new(turn.text.as_str(), &self.analyze(&turn.text)))
            .collect();

        let report = ConversationReport::from_messages(per_message);

        debug!(
            messages = report.per_message().len(),
            overall = report.overall().compound(),
            trend = %report.trend(),
            "conversation report"
        );
        metrics::counter!("moodline_conversations_reported_total", "trend" => report.trend().as_str())
            .increment(1);

        report
    }

    /// Report on an accumulated conversation
    pub fn report(&self, conversation: &Conversation) -> ConversationReport {
        self.conversation_sentiment(conversation.turns())
    }
}

impl std::fmt::Debug for SentimentEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentEngine")
            .field("strategy", &self.strategy())
            .finish()
    }
}

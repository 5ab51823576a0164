//! Keyword-counting polarity model
//!
//! Deterministic fallback used when no lexicon is available.

use crate::polarity::{round_to, PolarityModel, PolarityScores};
use tracing::debug;

const POSITIVE_MARKERS: &[&str] = &["good", "great", "happy", "love", "excellent", "best"];
const NEGATIVE_MARKERS: &[&str] = &["bad", "sad", "angry", "hate", "poor", "disappoint"];

/// Keyword-counting polarity model.
///
/// Counts case-insensitive substring occurrences of fixed positive and
/// negative markers and reports `(pos - neg) / (pos + neg)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordPolarity;

impl KeywordPolarity {
    pub fn new() -> Self {
        Self
    }

    fn count(text: &str, markers: &[&str]) -> usize {
        markers
            .iter()
            .map(|marker| text.matches(marker).count())
            .sum()
    }
}

impl PolarityModel for KeywordPolarity {
    fn score(&self, text: &str) -> PolarityScores {
        let lowered = text.to_lowercase();

        let pos = Self::count(&lowered, POSITIVE_MARKERS);
        let neg = Self::count(&lowered, NEGATIVE_MARKERS);
        let total = pos + neg;

        let compound = if total == 0 {
            0.0
        } else {
            round_to((pos as f64 - neg as f64) / total as f64, 3)
        };

        debug!(pos, neg, compound, "keyword polarity");

        PolarityScores::compound_only(compound)
    }

    fn name(&self) -> &'static str {
        "keyword"
    }
}

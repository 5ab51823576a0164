//! Label classifier
//!
//! Maps a continuous compound score onto a discrete [`SentimentLabel`].
//! Every label in Moodline is derived here; nothing else compares against
//! the thresholds.

use crate::types::SentimentLabel;

/// Compound scores at or above this value are positive
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound scores at or below this value are negative
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Classify a compound score.
pub fn label_for(compound: f64) -> SentimentLabel {
    if compound >= POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if compound <= NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

//! Polarity model trait and common types

use std::collections::BTreeMap;

/// Trait for text polarity scorers.
///
/// Implementations must never fail: a scorer that cannot score a text
/// returns a zero compound.
pub trait PolarityModel: Send + Sync {
    /// Score the given text
    fn score(&self, text: &str) -> PolarityScores;

    /// Get the strategy name
    fn name(&self) -> &'static str;
}

/// Raw output of a polarity model
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolarityScores {
    /// Continuous polarity in [-1, 1]
    pub compound: f64,

    /// Component intensities (e.g. `pos`, `neg`, `neu`), empty when unsupported
    pub subscores: BTreeMap<String, f64>,
}

impl PolarityScores {
    /// Create scores without sub-scores
    pub fn compound_only(compound: f64) -> Self {
        Self {
            compound,
            subscores: BTreeMap::new(),
        }
    }
}

/// Round to a fixed number of decimal places
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

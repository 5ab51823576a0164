//! VADER lexicon analyzer
//!
//! Wraps [`vader_sentiment::SentimentIntensityAnalyzer`], either over the
//! lexicon bundled with that crate or over a custom [`Lexicon`].

use crate::lexicon::Lexicon;
use crate::polarity::{round_to, PolarityModel, PolarityScores};
use std::collections::BTreeMap;
use vader_sentiment::SentimentIntensityAnalyzer;

/// Sub-score keys reported for every scored text
const SUBSCORE_KEYS: [&str; 4] = ["neg", "neu", "pos", "compound"];

/// Lexicon-driven VADER analyzer
pub struct VaderAnalyzer {
    analyzer: SentimentIntensityAnalyzer<'static>,
    /// Entry count of a custom lexicon, `None` for the bundled one
    custom_entries: Option<usize>,
}

impl VaderAnalyzer {
    /// Analyzer over the bundled VADER lexicon
    pub fn bundled() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
            custom_entries: None,
        }
    }

    /// Analyzer over a custom lexicon.
    ///
    /// The lexicon table lives for the rest of the process, so this is
    /// meant to run once per engine.
    pub fn with_lexicon(lexicon: Lexicon) -> Self {
        let entries = lexicon.len();
        Self {
            analyzer: SentimentIntensityAnalyzer::from_lexicon(lexicon.into_static()),
            custom_entries: Some(entries),
        }
    }

    /// Number of entries in the custom lexicon, if one is in use
    pub fn custom_entries(&self) -> Option<usize> {
        self.custom_entries
    }

    /// Compute `neg`, `neu`, `pos` and `compound` for a text
    pub fn polarity_scores(&self, text: &str) -> PolarityScores {
        if text.trim().is_empty() {
            return PolarityScores {
                compound: 0.0,
                subscores: SUBSCORE_KEYS.iter().map(|key| (key.to_string(), 0.0)).collect(),
            };
        }

        let scores = self.analyzer.polarity_scores(text);

        let subscores: BTreeMap<String, f64> = SUBSCORE_KEYS
            .iter()
            .map(|key| {
                let places = if *key == "compound" { 4 } else { 3 };
                let value = scores.get(*key).copied().unwrap_or(0.0);
                (key.to_string(), round_to(value, places))
            })
            .collect();

        PolarityScores {
            compound: subscores.get("compound").copied().unwrap_or(0.0),
            subscores,
        }
    }
}

impl PolarityModel for VaderAnalyzer {
    fn score(&self, text: &str) -> PolarityScores {
        self.polarity_scores(text)
    }

    fn name(&self) -> &'static str {
        "vader-lexicon"
    }
}

impl std::fmt::Debug for VaderAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VaderAnalyzer")
            .field("custom_entries", &self.custom_entries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom() -> VaderAnalyzer {
        VaderAnalyzer::with_lexicon(Lexicon::parse("good\t1.9\nbad\t-2.5\n").unwrap())
    }

    #[test]
    fn test_bundled_scores() {
        let analyzer = VaderAnalyzer::bundled();

        assert!((analyzer.polarity_scores("This is good").compound - 0.4404).abs() < 1e-3);
        assert!(analyzer.polarity_scores("This is terrible").compound < -0.05);
        assert!(analyzer.polarity_scores("I am not happy").compound < -0.05);
        assert_eq!(analyzer.custom_entries(), None);
    }

    #[test]
    fn test_intensifiers() {
        let analyzer = VaderAnalyzer::bundled();
        let plain = analyzer.polarity_scores("the food is good").compound;

        assert!(analyzer.polarity_scores("the food is very good").compound > plain);
        assert!(analyzer.polarity_scores("the food is good!!!").compound > plain);
    }

    #[test]
    fn test_subscores_present() {
        let scores = VaderAnalyzer::bundled().polarity_scores("what a lovely day");

        for key in SUBSCORE_KEYS {
            assert!(scores.subscores.contains_key(key), "missing {key}");
        }
        assert_eq!(scores.subscores["compound"], scores.compound);
        assert!((-1.0..=1.0).contains(&scores.compound));
    }

    #[test]
    fn test_blank_text_is_zero() {
        let scores = VaderAnalyzer::bundled().polarity_scores("   ");
        assert_eq!(scores.compound, 0.0);
        assert!(scores.subscores.values().all(|v| *v == 0.0));
    }

    #[test]
    fn test_custom_lexicon() {
        let analyzer = custom();

        assert_eq!(analyzer.custom_entries(), Some(2));
        assert!(analyzer.polarity_scores("good").compound > 0.0);
        assert!(analyzer.polarity_scores("bad").compound < 0.0);
        assert_eq!(analyzer.polarity_scores("a lovely day").compound, 0.0);
    }

    #[test]
    fn test_model_name() {
        assert_eq!(custom().name(), "vader-lexicon");
    }
}

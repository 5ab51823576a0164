//! Configuration for sentiment scoring

use crate::lexicon::LexiconSource;
use moodline_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the sentiment engine
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentimentConfig {
    /// Scoring strategy selection
    #[serde(default)]
    pub strategy: StrategySpec,

    /// Lexicon for the primary analyzer
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

/// Which polarity model the engine should use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategySpec {
    /// Lexicon analyzer, falling back to keywords if it cannot be initialized
    #[default]
    Auto,
    /// Keyword counting only; the lexicon is never loaded
    Keyword,
}

/// Lexicon configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiconConfig {
    /// Where to find the lexicon file
    #[serde(default)]
    pub source: LexiconSource,
}

impl LexiconConfig {
    /// Lexicon read from a local path
    pub fn local(path: impl Into<PathBuf>) -> Self {
        Self {
            source: LexiconSource::Local { path: path.into() },
        }
    }
}

impl SentimentConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config {}: {}", path.display(), e))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Use a local lexicon file
    pub fn with_lexicon_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon = LexiconConfig::local(path);
        self
    }

    /// Select the scoring strategy
    pub fn with_strategy(mut self, strategy: StrategySpec) -> Self {
        self.strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SentimentConfig::from_yaml("{}").unwrap();
        assert_eq!(config.strategy, StrategySpec::Auto);
        assert_eq!(config.lexicon.source, LexiconSource::default());
    }

    #[test]
    fn test_parse_local_lexicon() {
        let yaml = r#"
strategy: keyword
lexicon:
  source:
    type: local
    path: /opt/moodline/vader_lexicon.txt
"#;
        let config = SentimentConfig::from_yaml(yaml).unwrap();

        assert_eq!(config.strategy, StrategySpec::Keyword);
        assert_eq!(
            config.lexicon,
            LexiconConfig::local("/opt/moodline/vader_lexicon.txt")
        );
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let err = SentimentConfig::from_yaml("strategy: neural\n").unwrap_err();
        assert!(matches!(err, Error::Yaml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SentimentConfig::from_file("/nonexistent/moodline.yaml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}

//! Primary analyzer initialization

use crate::config::LexiconConfig;
use crate::lexicon::Lexicon;
use crate::polarity::PolarityModel;
use crate::vader::VaderAnalyzer;
use moodline_core::Result;
use std::sync::Arc;
use tracing::info;

/// Handle to an initialized lexicon analyzer.
///
/// Obtaining one is the expensive step (lexicon resolution, optional
/// download, parsing). Clones share the same analyzer.
#[derive(Debug, Clone)]
pub struct AnalyzerHandle {
    analyzer: Arc<VaderAnalyzer>,
}

impl AnalyzerHandle {
    /// Resolve the configured lexicon and build the analyzer
    pub fn initialize(config: &LexiconConfig) -> Result<Self> {
        let analyzer = match config.source.resolve()? {
            None => {
                info!("Using bundled VADER lexicon");
                VaderAnalyzer::bundled()
            }
            Some(path) => {
                let lexicon = Lexicon::from_file(&path)?;
                info!("Loaded lexicon with {} entries from {}", lexicon.len(), path.display());
                VaderAnalyzer::with_lexicon(lexicon)
            }
        };

        Ok(Self {
            analyzer: Arc::new(analyzer),
        })
    }

    pub fn analyzer(&self) -> &VaderAnalyzer {
        &self.analyzer
    }

    /// The analyzer as a shareable polarity model
    pub fn model(&self) -> Arc<dyn PolarityModel> {
        self.analyzer.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_initialize_bundled() {
        let handle = AnalyzerHandle::initialize(&LexiconConfig::default()).unwrap();

        assert_eq!(handle.analyzer().custom_entries(), None);
        assert_eq!(handle.model().name(), "vader-lexicon");
        assert!(handle.model().score("I love this").compound > 0.05);
    }

    #[test]
    fn test_initialize_from_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "good\t1.9\t0.9\t[1, 2]").unwrap();

        let handle = AnalyzerHandle::initialize(&LexiconConfig::local(file.path())).unwrap();

        assert_eq!(handle.analyzer().custom_entries(), Some(1));
        assert!((handle.model().score("good").compound - 0.4404).abs() < 1e-3);
    }

    #[test]
    fn test_initialize_missing_file() {
        let result = AnalyzerHandle::initialize(&LexiconConfig::local("/nonexistent/lexicon.txt"));
        assert!(result.is_err());
    }

    #[test]
    fn test_initialize_rejects_non_finite_lexicon() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "good\tNaN").unwrap();

        assert!(AnalyzerHandle::initialize(&LexiconConfig::local(file.path())).is_err());
    }
}

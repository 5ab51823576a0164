//! Sentiment lexicon loading
//!
//! The bundled VADER lexicon needs no setup. Custom lexicons use the
//! VADER text format: one entry per line,
//! `token<TAB>mean_valence[<TAB>std_dev<TAB>ratings...]`. Only the first two
//! columns are read.

use hf_hub::{api::sync::Api, Repo, RepoType};
use moodline_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;
use unicase::UniCase;

/// Where to obtain the lexicon
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LexiconSource {
    /// Lexicon shipped with the analyzer
    #[default]
    Bundled,

    /// Read from the local file system
    Local { path: PathBuf },

    /// Download once from the Hugging Face Hub (cached by hf-hub)
    #[serde(rename = "huggingface")]
    HuggingFace {
        repo: String,
        #[serde(default)]
        revision: Option<String>,
        filename: String,
        #[serde(default)]
        repo_type: HubRepoType,
    },
}

/// Kind of Hugging Face repository hosting the lexicon
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HubRepoType {
    #[default]
    Model,
    Dataset,
}

impl LexiconSource {
    /// Resolve the source to a readable local file, downloading if necessary.
    ///
    /// The bundled lexicon has no file and resolves to `None`.
    pub fn resolve(&self) -> Result<Option<PathBuf>> {
        match self {
            LexiconSource::Bundled => Ok(None),
            LexiconSource::Local { path } => {
                if !path.exists() {
                    return Err(Error::lexicon(format!(
                        "Lexicon file not found: {}",
                        path.display()
                    )));
                }
                Ok(Some(path.clone()))
            }
            LexiconSource::HuggingFace {
                repo,
                revision,
                filename,
                repo_type,
            } => {
                let api = Api::new()
                    .map_err(|e| Error::download(format!("Failed to initialize HF API: {}", e)))?;

                let repo_type = match repo_type {
                    HubRepoType::Model => RepoType::Model,
                    HubRepoType::Dataset => RepoType::Dataset,
                };

                let repo = api.repo(Repo::with_revision(
                    repo.clone(),
                    repo_type,
                    revision.clone().unwrap_or_else(|| "main".to_string()),
                ));

                info!("Fetching lexicon {} from Hugging Face", filename);

                repo.get(filename)
                    .map(Some)
                    .map_err(|e| Error::download(format!("Failed to download lexicon from HF: {}", e)))
            }
        }
    }
}

/// Word-to-valence mapping.
///
/// Tokens are stored lowercased.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, f64>,
}

impl Lexicon {
    /// Parse a lexicon from its text form
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = HashMap::new();

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim_end();
            if line.trim().is_empty() {
                continue;
            }

            let mut columns = line.split('\t');
            let token = columns.next().unwrap_or_default().trim();
            if token.is_empty() {
                return Err(Error::lexicon(format!("line {}: missing token", idx + 1)));
            }

            let valence = columns
                .next()
                .ok_or_else(|| Error::lexicon(format!("line {}: missing valence for '{}'", idx + 1, token)))?
                .trim()
                .parse::<f64>()
                .map_err(|e| {
                    Error::lexicon(format!("line {}: invalid valence for '{}': {}", idx + 1, token, e))
                })?;

            if !valence.is_finite() {
                return Err(Error::lexicon(format!(
                    "line {}: valence for '{}' is not finite",
                    idx + 1,
                    token
                )));
            }

            entries.insert(token.to_lowercase(), valence);
        }

        if entries.is_empty() {
            return Err(Error::lexicon("lexicon contains no entries"));
        }

        Ok(Self { entries })
    }

    /// Read and parse a lexicon file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Leak the table so it can back an analyzer for the rest of the process
    pub(crate) fn into_static(self) -> &'static HashMap<UniCase<&'static str>, f64> {
        let table: HashMap<UniCase<&'static str>, f64> = self
            .entries
            .into_iter()
            .map(|(token, valence)| {
                let token: &'static str = Box::leak(token.into_boxed_str());
                (UniCase::new(token), valence)
            })
            .collect();
        Box::leak(Box::new(table))
    }

    /// Valence for a lowercased token
    pub fn valence(&self, token: &str) -> Option<f64> {
        self.entries.get(token).copied()
    }

    /// Whether the lowercased token is present
    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, f64)> for Lexicon {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(token, valence)| (token.to_lowercase(), valence))
                .collect(),
        }
    }
}

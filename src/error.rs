// src/error.rs
//! Error taxonomy for the corpus pipeline.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure reported by a [`PolarityScorer`](crate::sentiment::PolarityScorer).
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringError {
    /// Nothing left to score after tokenization.
    EmptyText,
    /// Scorer-specific failure.
    Other(String),
}

impl fmt::Display for ScoringError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringError::EmptyText => write!(f, "text contains no scorable tokens"),
            ScoringError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for ScoringError {}

#[derive(Debug)]
pub enum CorpusError {
    /// Stop-word file or document missing/unreadable. Aborts the run.
    SourceUnreadable { path: PathBuf, source: io::Error },
    /// The polarity scorer rejected one document.
    ScoringFailure { label: String, source: ScoringError },
    /// A derived view was requested before any document was ingested.
    EmptyCorpus { view: &'static str },
    /// Writing a rendered artifact failed.
    Render { path: PathBuf, source: io::Error },
    Serialize(serde_json::Error),
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorpusError::SourceUnreadable { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
            CorpusError::ScoringFailure { label, source } => {
                write!(f, "sentiment scoring failed for '{label}': {source}")
            }
            CorpusError::EmptyCorpus { view } => {
                write!(f, "cannot build {view}: no documents have been loaded")
            }
            CorpusError::Render { path, source } => {
                write!(f, "cannot write {}: {}", path.display(), source)
            }
            CorpusError::Serialize(e) => write!(f, "serialization failed: {e}"),
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CorpusError::SourceUnreadable { source, .. } => Some(source),
            CorpusError::ScoringFailure { source, .. } => Some(source),
            CorpusError::Render { source, .. } => Some(source),
            CorpusError::Serialize(e) => Some(e),
            CorpusError::EmptyCorpus { .. } => None,
        }
    }
}

impl From<serde_json::Error> for CorpusError {
    fn from(e: serde_json::Error) -> Self {
        CorpusError::Serialize(e)
    }
}

pub type Result<T> = std::result::Result<T, CorpusError>;

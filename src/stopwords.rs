//! # Stop words
//! Lowercase token set loaded once per session from a plain-text file
//! (one token per line). An empty set means "no filtering".

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{CorpusError, Result};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWordSet {
    words: HashSet<String>,
}

impl StopWordSet {
    /// Empty set; tokenization keeps every token.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build from arbitrary words, applying the same normalization as [`StopWordSet::load`].
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Read one token per line; lines are trimmed and lowercased, blank lines dropped.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CorpusError::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let set = Self::parse(&content);
        info!(path = %path.display(), count = set.len(), "loaded stop words");
        Ok(set)
    }

    /// Parse file contents (same rules as [`StopWordSet::load`]).
    pub fn parse(content: &str) -> Self {
        Self::from_words(content.lines())
    }

    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_lowercases_and_skips_blank_lines() {
        let set = StopWordSet::parse("  The \n\nAND\n   \nof\n");
        assert_eq!(set.len(), 3);
        assert!(set.contains("the"));
        assert!(set.contains("and"));
        assert!(set.contains("of"));
        assert!(!set.contains("The"));
    }

    #[test]
    fn duplicates_collapse() {
        let set = StopWordSet::parse("a\nA\na \n");
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn missing_file_is_source_unreadable() {
        let err = StopWordSet::load("__no_such_stopword_file__.txt").unwrap_err();
        assert!(matches!(err, CorpusError::SourceUnreadable { .. }));
    }

    #[test]
    fn loads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("stop.txt");
        fs::write(&p, "the\nIs\n\n").unwrap();
        let set = StopWordSet::load(&p).unwrap();
        assert!(set.contains("is"));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn empty_file_gives_empty_set() {
        let dir = tempfile::tempdir().unwrap();
        let p = dir.path().join("stop.txt");
        fs::write(&p, "").unwrap();
        assert!(StopWordSet::load(&p).unwrap().is_empty());
    }
}

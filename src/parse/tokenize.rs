// src/parse/tokenize.rs
//! Prose tokenizer and the insertion-ordered word counter it feeds.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::stopwords::StopWordSet;

/// Anything that is neither a word character nor a separator. Word characters are
/// letters, numbers of any kind (`½`, `²`) and `_`; combining marks are not.
/// `\x1C`-`\x1F` (information separators) count as separators.
static RE_NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\p{L}\p{N}_\s\x1C-\x1F]").expect("non-word regex"));

#[inline]
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Word → count. Iteration order is the order in which each word was first seen,
/// which is what ties in [`top_words`](crate::vocabulary::top_words) fall back on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordFrequency(IndexMap<String, u64>);

impl WordFrequency {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `word`.
    pub fn add(&mut self, word: &str) {
        if let Some(c) = self.0.get_mut(word) {
            *c += 1;
        } else {
            self.0.insert(word.to_string(), 1);
        }
    }

    /// Count for `word`, 0 when absent.
    #[inline]
    pub fn count(&self, word: &str) -> u64 {
        self.0.get(word).copied().unwrap_or(0)
    }

    /// `(word, count)` pairs in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.0.iter().map(|(w, &c)| (w.as_str(), c))
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordFrequency {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut wf = WordFrequency::new();
        for w in iter {
            wf.add(w.as_ref());
        }
        wf
    }
}

/// Lowercase, drop every non-word/non-separator character, split on separators,
/// then remove stop words (no-op for an empty set).
pub fn tokenize(text: &str, stop_words: &StopWordSet) -> Vec<String> {
    let lowered = text.to_lowercase();
    let cleaned = RE_NON_WORD.replace_all(&lowered, "");
    cleaned
        .split(is_separator)
        .filter(|t| !t.is_empty())
        .filter(|t| stop_words.is_empty() || !stop_words.contains(t))
        .map(str::to_string)
        .collect()
}

// src/vocabulary.rs
//! Top-K word selection and the cross-document vocabulary union.
//!
//! Ties on count are broken by first occurrence in the token stream. Because
//! [`WordFrequency`] iterates in first-occurrence order, a stable sort on count
//! (descending) is enough.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::corpus::{metric, CorpusStore};
use crate::parse::WordFrequency;

/// The `k` most frequent words of one document.
pub fn top_words(freq: &WordFrequency, k: usize) -> Vec<(&str, u64)> {
    let mut all: Vec<(&str, u64)> = freq.iter().collect();
    // stable: equal counts keep first-occurrence order
    all.sort_by(|a, b| b.1.cmp(&a.1));
    all.truncate(k);
    all
}

/// Ordered, deduplicated word axis shared by every document in the flow graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    words: IndexSet<String>,
}

impl Vocabulary {
    /// Caller-supplied list, kept in the given order.
    ///
    /// A word listed more than once keeps only its first position, so the list
    /// `["a", "b", "a"]` yields two word nodes, `a` then `b`. Node labels in the
    /// flow graph stay unique.
    pub fn explicit<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Append `word` unless already present.
    pub fn push(&mut self, word: &str) {
        if !self.words.contains(word) {
            self.words.insert(word.to_string());
        }
    }

    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.words.iter().map(String::as_str)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// How the word axis of the flow graph is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularySource {
    /// Union of each document's top `k` words.
    TopK(usize),
    /// Fixed word list; bypasses per-document selection.
    Explicit(Vec<String>),
}

impl Default for VocabularySource {
    fn default() -> Self {
        VocabularySource::TopK(5)
    }
}

impl VocabularySource {
    pub fn resolve(&self, corpus: &CorpusStore) -> Vocabulary {
        match self {
            VocabularySource::TopK(k) => global_vocabulary(corpus, *k),
            VocabularySource::Explicit(words) => Vocabulary::explicit(words.iter().cloned()),
        }
    }
}

/// Union of per-document top-`k` words: documents in ingestion order, words in
/// rank order within each document.
pub fn global_vocabulary(corpus: &CorpusStore, k: usize) -> Vocabulary {
    let mut vocab = Vocabulary::default();
    for label in corpus.document_labels(metric::WORD_FREQUENCY) {
        let Some(freq) = corpus.word_frequency(label) else {
            continue;
        };
        for (word, _) in top_words(freq, k) {
            vocab.push(word);
        }
    }
    vocab
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::TextParser;
    use crate::stopwords::StopWordSet;

    fn store(docs: &[(&str, &str)]) -> CorpusStore {
        let sw = StopWordSet::empty();
        let parser = TextParser::new(&sw);
        let mut s = CorpusStore::new();
        for (label, text) in docs {
            s.ingest(label, parser.parse_text(*text).into_fields());
        }
        s
    }

    #[test]
    fn ties_follow_first_occurrence_not_alphabet() {
        // first seen: a, c, b
        let wf: WordFrequency = ["a", "c", "b", "a", "b", "a", "b"].into_iter().collect();
        assert_eq!(wf.count("a"), 3);
        assert_eq!(wf.count("b"), 3);
        assert_eq!(top_words(&wf, 2), vec![("a", 3), ("b", 3)]);
    }

    #[test]
    fn explicit_list_keeps_order_and_drops_repeats() {
        let v = Vocabulary::explicit(["a", "b", "a"]);
        assert_eq!(v.len(), 2);
        assert_eq!(v.words().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn later_first_occurrence_loses_tie() {
        let wf: WordFrequency = ["z", "y", "y", "z"].into_iter().collect();
        assert_eq!(top_words(&wf, 1), vec![("z", 2)]);
    }

    #[test]
    fn k_larger_than_vocabulary_and_zero() {
        let wf: WordFrequency = ["x", "y"].into_iter().collect();
        assert_eq!(top_words(&wf, 10).len(), 2);
        assert!(top_words(&wf, 0).is_empty());
    }

    #[test]
    fn union_is_ordered_and_deduplicated() {
        let s = store(&[("d1", "the cat sat"), ("d2", "the cat ran")]);
        let v = global_vocabulary(&s, 2);
        assert_eq!(v.words().collect::<Vec<_>>(), vec!["the", "cat"]);
    }

    #[test]
    fn union_appends_new_words_in_document_order() {
        let s = store(&[("d1", "b b a"), ("d2", "c c c b")]);
        let v = global_vocabulary(&s, 2);
        assert_eq!(v.words().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn explicit_list_bypasses_top_k() {
        let s = store(&[("d1", "a a a b")]);
        let v = VocabularySource::Explicit(vec!["zebra".into(), "b".into(), "zebra".into()])
            .resolve(&s);
        assert_eq!(v.words().collect::<Vec<_>>(), vec!["zebra", "b"]);
        assert!(!v.contains("a"));
    }
}

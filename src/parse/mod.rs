// src/parse/mod.rs
//! Document parsing: the pluggable [`DocumentParser`] capability and the default
//! prose parser that produces word frequencies, a word count and the raw text.

pub mod tokenize;

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::corpus::{metric, Fields, MetricValue};
use crate::error::{CorpusError, Result};
use crate::stopwords::StopWordSet;

pub use tokenize::{tokenize, WordFrequency};

/// Output of the default parser. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub word_frequency: WordFrequency,
    /// Tokens remaining after stop-word removal.
    pub word_count: u64,
    /// Source text, verbatim.
    pub raw_text: String,
}

impl ParseResult {
    /// Field map in the shape the corpus store folds in.
    pub fn into_fields(self) -> Fields {
        let mut fields = Fields::new();
        fields.insert(
            metric::WORD_FREQUENCY.to_string(),
            MetricValue::Frequency(self.word_frequency),
        );
        fields.insert(
            metric::WORD_COUNT.to_string(),
            MetricValue::Count(self.word_count),
        );
        fields.insert(metric::RAW_TEXT.to_string(), MetricValue::Text(self.raw_text));
        fields
    }
}

/// Anything that can turn a document source into a field map.
///
/// The corpus store does not care which fields come back, so an implementation may
/// add fields (e.g. structured metadata) or leave some out.
pub trait DocumentParser {
    fn parse(&self, source: &Path) -> Result<Fields>;
}

/// Default prose parser bound to the session's stop words.
#[derive(Debug, Clone, Copy)]
pub struct TextParser<'a> {
    stop_words: &'a StopWordSet,
}

impl<'a> TextParser<'a> {
    pub fn new(stop_words: &'a StopWordSet) -> Self {
        Self { stop_words }
    }

    /// Read `source` and parse it.
    pub fn parse_file(&self, source: &Path) -> Result<ParseResult> {
        let text = read_source(source)?;
        let result = self.parse_text(text);
        debug!(
            source = %source.display(),
            id = %text_digest(&result.raw_text),
            words = result.word_count,
            distinct = result.word_frequency.len(),
            "parsed document"
        );
        Ok(result)
    }

    /// Parse in-memory text.
    pub fn parse_text(&self, text: impl Into<String>) -> ParseResult {
        let raw_text = text.into();
        let tokens = tokenize(&raw_text, self.stop_words);
        let word_count = tokens.len() as u64;
        let word_frequency: WordFrequency = tokens.iter().collect();
        ParseResult {
            word_frequency,
            word_count,
            raw_text,
        }
    }
}

impl DocumentParser for TextParser<'_> {
    fn parse(&self, source: &Path) -> Result<Fields> {
        Ok(self.parse_file(source)?.into_fields())
    }
}

/// Read a whole document, mapping I/O failures to [`CorpusError::SourceUnreadable`].
pub fn read_source(source: &Path) -> Result<String> {
    fs::read_to_string(source).map_err(|e| CorpusError::SourceUnreadable {
        path: source.to_path_buf(),
        source: e,
    })
}

/// Short anonymized id for log lines. Raw text is never logged.
pub(crate) fn text_digest(text: &str) -> String {
    use sha2::{Digest, Sha256};
    Sha256::digest(text.as_bytes())[..6]
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_world_without_stop_words() {
        let sw = StopWordSet::empty();
        let r = TextParser::new(&sw).parse_text("Hello, World! World.");
        assert_eq!(r.word_count, 3);
        assert_eq!(r.word_frequency.count("hello"), 1);
        assert_eq!(r.word_frequency.count("world"), 2);
        assert_eq!(r.word_frequency.len(), 2);
        assert_eq!(r.raw_text, "Hello, World! World.");
    }

    #[test]
    fn hello_world_with_world_as_stop_word() {
        let sw = StopWordSet::from_words(["world"]);
        let r = TextParser::new(&sw).parse_text("Hello, World! World.");
        assert_eq!(r.word_count, 1);
        assert_eq!(r.word_frequency.iter().collect::<Vec<_>>(), vec![("hello", 1)]);
    }

    #[test]
    fn unicode_word_classes() {
        let sw = StopWordSet::empty();
        let parser = TextParser::new(&sw);
        let pairs = |text: &str| -> Vec<(String, u64)> {
            parser
                .parse_text(text)
                .word_frequency
                .iter()
                .map(|(w, c)| (w.to_string(), c))
                .collect()
        };
        let owned = |ws: &[&str]| -> Vec<(String, u64)> {
            ws.iter().map(|w| (w.to_string(), 1)).collect()
        };
        assert_eq!(pairs("cafe\u{301} menu"), owned(&["cafe", "menu"]));
        assert_eq!(pairs("x½ y"), owned(&["x½", "y"]));
        assert_eq!(pairs("a\u{1c}b"), owned(&["a", "b"]));
    }

    #[test]
    fn fields_use_metric_names() {
        let sw = StopWordSet::empty();
        let fields = TextParser::new(&sw).parse_text("a b a").into_fields();
        let keys: Vec<_> = fields.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![metric::WORD_FREQUENCY, metric::WORD_COUNT, metric::RAW_TEXT]
        );
        assert_eq!(fields[metric::WORD_COUNT], MetricValue::Count(3));
    }

    #[test]
    fn unreadable_file_is_reported_with_path() {
        let sw = StopWordSet::empty();
        let err = TextParser::new(&sw)
            .parse(Path::new("__missing_document__.txt"))
            .unwrap_err();
        match err {
            CorpusError::SourceUnreadable { path, .. } => {
                assert_eq!(path, Path::new("__missing_document__.txt"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn digest_is_short_and_stable() {
        let a = text_digest("same text");
        assert_eq!(a.len(), 12);
        assert_eq!(a, text_digest("same text"));
        assert_ne!(a, text_digest("other text"));
    }
}

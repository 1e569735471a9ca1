// src/corpus.rs
//! # Corpus store
//! Two-level map `metric → (document label → value)`. Both levels keep insertion
//! order, so document axes in every derived view follow load order.
//!
//! The store is agnostic to which metrics a parser produces; the typed accessors
//! below are conveniences for the fields the default parser emits.

use indexmap::IndexMap;
use metrics::{counter, describe_counter};
use once_cell::sync::OnceCell;
use serde::Serialize;
use tracing::{debug, warn};

use crate::parse::WordFrequency;

/// Metric names produced by the default parser.
pub mod metric {
    pub const WORD_FREQUENCY: &str = "wordFrequency";
    pub const WORD_COUNT: &str = "wordCount";
    pub const RAW_TEXT: &str = "rawText";
}

/// Value of a single metric for a single document. Serialize-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricValue {
    Frequency(WordFrequency),
    Count(u64),
    Text(String),
    /// Free-form metadata from custom parsers.
    Json(serde_json::Value),
}

impl MetricValue {
    pub fn as_frequency(&self) -> Option<&WordFrequency> {
        match self {
            MetricValue::Frequency(f) => Some(f),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<u64> {
        match self {
            MetricValue::Count(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            MetricValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Field map returned by a parser: metric name → value, in production order.
pub type Fields = IndexMap<String, MetricValue>;

/// One-time metrics registration.
pub(crate) fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(
            "corpus_documents_ingested_total",
            "Documents folded into the corpus store (re-ingests included)."
        );
        describe_counter!(
            "corpus_tokens_total",
            "Tokens kept after stop-word removal across ingested documents."
        );
        describe_counter!(
            "sentiment_scoring_failures_total",
            "Documents the polarity scorer rejected."
        );
    });
}

#[derive(Debug, Clone, Default)]
pub struct CorpusStore {
    data: IndexMap<String, IndexMap<String, MetricValue>>,
}

impl CorpusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every field into `store[field][label]`.
    ///
    /// A label seen before keeps its original position; only the values of the
    /// fields present in `fields` are replaced.
    pub fn ingest(&mut self, label: &str, fields: Fields) {
        ensure_metrics_described();

        if self.contains_label(label) {
            warn!(%label, "label already loaded; overwriting previous values");
        }

        for (name, value) in fields {
            if let MetricValue::Count(n) = &value {
                if name == metric::WORD_COUNT {
                    counter!("corpus_tokens_total").increment(*n);
                }
            }
            self.data
                .entry(name)
                .or_default()
                .insert(label.to_string(), value);
        }

        counter!("corpus_documents_ingested_total").increment(1);
        debug!(%label, metrics = self.data.len(), "ingested document");
    }

    /// Labels stored under `metric`, in ingestion order. Empty if the metric is unknown.
    pub fn document_labels(&self, metric: &str) -> Vec<&str> {
        self.data
            .get(metric)
            .map(|m| m.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn get(&self, metric: &str, label: &str) -> Option<&MetricValue> {
        self.data.get(metric).and_then(|m| m.get(label))
    }

    /// Metric names in first-seen order.
    pub fn metrics(&self) -> Vec<&str> {
        self.data.keys().map(String::as_str).collect()
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.data.values().any(|m| m.contains_key(label))
    }

    pub fn is_empty(&self) -> bool {
        self.data.values().all(|m| m.is_empty())
    }

    pub fn word_frequency(&self, label: &str) -> Option<&WordFrequency> {
        self.get(metric::WORD_FREQUENCY, label)
            .and_then(MetricValue::as_frequency)
    }

    pub fn word_count(&self, label: &str) -> Option<u64> {
        self.get(metric::WORD_COUNT, label)
            .and_then(MetricValue::as_count)
    }

    pub fn raw_text(&self, label: &str) -> Option<&str> {
        self.get(metric::RAW_TEXT, label).and_then(MetricValue::as_text)
    }
}

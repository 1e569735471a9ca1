// src/sentiment/mod.rs
//! Per-document polarity scores and the metric × document matrix built from them.
//!
//! The scorer itself sits behind [`PolarityScorer`]; [`LexiconScorer`] is the
//! default implementation.

pub mod lexicon;

use indexmap::IndexMap;
use metrics::counter;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::corpus::{ensure_metrics_described, metric, CorpusStore, MetricValue};
use crate::error::{CorpusError, Result, ScoringError};

pub use lexicon::LexiconScorer;

/// Four-field polarity result. `neg + neu + pos ≈ 1`, `compound ∈ [-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SentimentScore {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

impl SentimentScore {
    pub fn get(&self, m: SentimentMetric) -> f64 {
        match m {
            SentimentMetric::Neg => self.neg,
            SentimentMetric::Neu => self.neu,
            SentimentMetric::Pos => self.pos,
            SentimentMetric::Compound => self.compound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SentimentMetric {
    Neg,
    Neu,
    Pos,
    Compound,
}

impl SentimentMetric {
    pub const ALL: [SentimentMetric; 4] = [
        SentimentMetric::Neg,
        SentimentMetric::Neu,
        SentimentMetric::Pos,
        SentimentMetric::Compound,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentMetric::Neg => "neg",
            SentimentMetric::Neu => "neu",
            SentimentMetric::Pos => "pos",
            SentimentMetric::Compound => "compound",
        }
    }
}

/// External polarity scorer.
pub trait PolarityScorer {
    fn polarity_scores(&self, text: &str) -> std::result::Result<SentimentScore, ScoringError>;
}

/// Rows = metrics, columns = documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentMatrix {
    pub metrics: Vec<SentimentMetric>,
    pub documents: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl SentimentMatrix {
    /// `None` when either index is out of range.
    #[inline]
    pub fn cell(&self, metric: usize, document: usize) -> Option<f64> {
        self.values.get(metric)?.get(document).copied()
    }
}

pub struct SentimentAggregator<S> {
    scorer: S,
}

impl<S: PolarityScorer> SentimentAggregator<S> {
    pub fn new(scorer: S) -> Self {
        Self { scorer }
    }

    fn score_one(&self, corpus: &CorpusStore, label: &str) -> Result<SentimentScore> {
        let text = match corpus.get(metric::RAW_TEXT, label) {
            Some(MetricValue::Text(t)) => Ok(t.as_str()),
            _ => Err(ScoringError::Other(format!("{} is not text", metric::RAW_TEXT))),
        };
        text.and_then(|t| self.scorer.polarity_scores(t)).map_err(|source| {
            ensure_metrics_described();
            counter!("sentiment_scoring_failures_total").increment(1);
            warn!(%label, error = %source, "sentiment scoring failed");
            CorpusError::ScoringFailure {
                label: label.to_string(),
                source,
            }
        })
    }

    fn labels<'c>(corpus: &'c CorpusStore, view: &'static str) -> Result<Vec<&'c str>> {
        let labels = corpus.document_labels(metric::RAW_TEXT);
        if labels.is_empty() {
            return Err(CorpusError::EmptyCorpus { view });
        }
        Ok(labels)
    }

    /// Score every document under `rawText`; stops at the first failing document.
    pub fn score_all(&self, corpus: &CorpusStore) -> Result<IndexMap<String, SentimentScore>> {
        let labels = Self::labels(corpus, "sentiment breakdown")?;
        let mut out = IndexMap::with_capacity(labels.len());
        for label in labels {
            let score = self.score_one(corpus, label)?;
            debug!(%label, ?score, "scored document");
            out.insert(label.to_string(), score);
        }
        Ok(out)
    }

    /// Score every document without stopping, so all failures can be reported.
    pub fn score_each(
        &self,
        corpus: &CorpusStore,
    ) -> Result<Vec<(String, Result<SentimentScore>)>> {
        let labels = Self::labels(corpus, "sentiment breakdown")?;
        Ok(labels
            .into_iter()
            .map(|label| (label.to_string(), self.score_one(corpus, label)))
            .collect())
    }

    /// Metric-major table for heatmap rendering. Scores are recomputed per call.
    pub fn matrix(
        &self,
        corpus: &CorpusStore,
        metrics: &[SentimentMetric],
    ) -> Result<SentimentMatrix> {
        let labels = Self::labels(corpus, "sentiment matrix")?;
        let scores = labels
            .iter()
            .map(|l| self.score_one(corpus, l))
            .collect::<Result<Vec<_>>>()?;

        let values = metrics
            .iter()
            .map(|&m| scores.iter().map(|s| s.get(m)).collect())
            .collect();

        Ok(SentimentMatrix {
            metrics: metrics.to_vec(),
            documents: labels.into_iter().map(str::to_string).collect(),
            values,
        })
    }
}

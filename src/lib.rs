// src/lib.rs
// Public library surface for the binary and integration tests.

pub mod config;
pub mod corpus;
pub mod error;
pub mod flow;
pub mod parse;
pub mod pipeline;
pub mod render;
pub mod sentiment;
pub mod session;
pub mod stopwords;
pub mod vocabulary;

// ---- Re-exports for stable public API ----
pub use crate::corpus::{metric, CorpusStore, Fields, MetricValue};
pub use crate::error::{CorpusError, Result, ScoringError};
pub use crate::flow::{FlowEdge, FlowGraph, FlowGraphBuilder};
pub use crate::parse::{DocumentParser, ParseResult, TextParser, WordFrequency};
pub use crate::sentiment::{
    LexiconScorer, PolarityScorer, SentimentAggregator, SentimentMatrix, SentimentMetric,
    SentimentScore,
};
pub use crate::session::Corpus;
pub use crate::stopwords::StopWordSet;
pub use crate::vocabulary::{global_vocabulary, top_words, Vocabulary, VocabularySource};

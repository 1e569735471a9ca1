// src/session.rs
//! Corpus session: owns the stop words and the store, and is the single place
//! documents are loaded through.

use std::path::Path;

use indexmap::IndexMap;
use tracing::info;

use crate::corpus::CorpusStore;
use crate::error::Result;
use crate::flow::{FlowGraph, FlowGraphBuilder};
use crate::parse::{DocumentParser, TextParser};
use crate::sentiment::{
    PolarityScorer, SentimentAggregator, SentimentMatrix, SentimentMetric, SentimentScore,
};
use crate::stopwords::StopWordSet;
use crate::vocabulary::VocabularySource;

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    stop_words: StopWordSet,
    store: CorpusStore,
}

impl Corpus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stop_words(stop_words: StopWordSet) -> Self {
        Self {
            stop_words,
            store: CorpusStore::new(),
        }
    }

    /// Replace the stop-word set. Affects documents loaded afterwards only.
    pub fn load_stop_words<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        self.stop_words = StopWordSet::load(path)?;
        Ok(())
    }

    pub fn stop_words(&self) -> &StopWordSet {
        &self.stop_words
    }

    pub fn store(&self) -> &CorpusStore {
        &self.store
    }

    /// Parse `path` (default parser unless `parser` is given) and fold the fields
    /// under `label`, or under the path itself when no label is supplied.
    pub fn load_text(
        &mut self,
        path: &Path,
        label: Option<&str>,
        parser: Option<&dyn DocumentParser>,
    ) -> Result<()> {
        let fields = match parser {
            Some(p) => p.parse(path)?,
            None => TextParser::new(&self.stop_words).parse(path)?,
        };
        let label = label
            .map(str::to_string)
            .unwrap_or_else(|| path.display().to_string());
        info!(%label, fields = fields.len(), "loaded text");
        self.store.ingest(&label, fields);
        Ok(())
    }

    /// Default-parse in-memory text under `label`.
    pub fn load_str(&mut self, label: &str, text: &str) {
        let fields = TextParser::new(&self.stop_words)
            .parse_text(text)
            .into_fields();
        self.store.ingest(label, fields);
    }

    pub fn flow_graph(&self, vocabulary: &VocabularySource) -> Result<FlowGraph> {
        self.flow_graph_with(vocabulary, FlowGraphBuilder::new())
    }

    pub fn flow_graph_with(
        &self,
        vocabulary: &VocabularySource,
        builder: FlowGraphBuilder,
    ) -> Result<FlowGraph> {
        let vocab = vocabulary.resolve(&self.store);
        builder.build(&self.store, &vocab)
    }

    pub fn sentiment_scores<S: PolarityScorer>(
        &self,
        scorer: S,
    ) -> Result<IndexMap<String, SentimentScore>> {
        SentimentAggregator::new(scorer).score_all(&self.store)
    }

    pub fn sentiment_matrix<S: PolarityScorer>(&self, scorer: S) -> Result<SentimentMatrix> {
        SentimentAggregator::new(scorer).matrix(&self.store, &SentimentMetric::ALL)
    }
}

// src/flow.rs
//! # Flow graph
//! Weighted bipartite graph documents → vocabulary words, the data behind the
//! Sankey view. Pure function of the corpus store and a vocabulary.
//!
//! Node layout: document labels first (ingestion order), then vocabulary words
//! (vocabulary order). An edge is emitted only when the word occurs in the
//! document strictly more than `threshold` times; with the default threshold of 1,
//! singleton occurrences never produce an edge.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::corpus::{metric, CorpusStore};
use crate::error::{CorpusError, Result};
use crate::vocabulary::Vocabulary;

/// Counts must exceed this to produce an edge.
pub const DEFAULT_EDGE_THRESHOLD: u64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    /// Index into [`FlowGraph::nodes`] of the document node.
    pub source: usize,
    /// Index into [`FlowGraph::nodes`] of the word node.
    pub target: usize,
    /// Raw count of the word in the document.
    pub weight: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<String>,
    pub edges: Vec<FlowEdge>,
    /// Number of leading nodes that are documents.
    pub document_count: usize,
}

impl FlowGraph {
    /// Leading document nodes. `document_count` is clamped to the node list.
    pub fn document_nodes(&self) -> &[String] {
        &self.nodes[..self.split()]
    }

    pub fn word_nodes(&self) -> &[String] {
        &self.nodes[self.split()..]
    }

    #[inline]
    fn split(&self) -> usize {
        self.document_count.min(self.nodes.len())
    }

    /// Weight of the edge between two labels, if present.
    pub fn edge_weight(&self, document: &str, word: &str) -> Option<u64> {
        let src = self.document_nodes().iter().position(|n| n == document)?;
        let tgt = self
            .word_nodes()
            .iter()
            .position(|n| n == word)
            .map(|i| i + self.split())?;
        self.edges
            .iter()
            .find(|e| e.source == src && e.target == tgt)
            .map(|e| e.weight)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FlowGraphBuilder {
    threshold: u64,
}

impl Default for FlowGraphBuilder {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_EDGE_THRESHOLD,
        }
    }
}

impl FlowGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the exclusive minimum count.
    pub fn with_threshold(mut self, threshold: u64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn build(&self, corpus: &CorpusStore, vocabulary: &Vocabulary) -> Result<FlowGraph> {
        let docs = corpus.document_labels(metric::WORD_FREQUENCY);
        if docs.is_empty() {
            return Err(CorpusError::EmptyCorpus { view: "flow graph" });
        }

        let document_count = docs.len();
        let mut nodes: Vec<String> = docs.iter().map(|d| d.to_string()).collect();
        nodes.extend(vocabulary.words().map(str::to_string));

        let mut edges = Vec::new();
        for (di, doc) in docs.iter().enumerate() {
            let Some(freq) = corpus.word_frequency(doc) else {
                continue;
            };
            for (wi, word) in vocabulary.words().enumerate() {
                let count = freq.count(word);
                if count > self.threshold {
                    edges.push(FlowEdge {
                        source: di,
                        target: document_count + wi,
                        weight: count,
                    });
                }
            }
        }

        debug!(
            documents = document_count,
            words = vocabulary.len(),
            edges = edges.len(),
            threshold = self.threshold,
            "built flow graph"
        );

        Ok(FlowGraph {
            nodes,
            edges,
            document_count,
        })
    }
}

// src/pipeline.rs
//! Fixed invocation sequence: load stop words, ingest the configured documents,
//! then produce each enabled view and hand it to the renderer.

use anyhow::{Context, Result};
use indexmap::IndexMap;
use tracing::info;

use crate::config::AppConfig;
use crate::flow::{FlowGraph, FlowGraphBuilder};
use crate::render::{Renderer, SankeyFigure, SentimentBreakdown, SentimentHeatmap};
use crate::sentiment::{LexiconScorer, SentimentMatrix, SentimentScore};
use crate::session::Corpus;

/// What a run produced, for callers that want the data as well as the files.
#[derive(Debug, Default)]
pub struct RunReport {
    pub documents: usize,
    pub flow_graph: Option<FlowGraph>,
    pub sentiment: Option<IndexMap<String, SentimentScore>>,
    pub heatmap: Option<SentimentMatrix>,
}

/// Build the session described by `config` (stop words + documents).
pub fn load_corpus(config: &AppConfig) -> Result<Corpus> {
    let mut corpus = Corpus::new();
    if let Some(sw) = &config.stop_words {
        corpus
            .load_stop_words(sw)
            .with_context(|| format!("loading stop words from {}", sw.display()))?;
    }
    for doc in &config.documents {
        corpus
            .load_text(&doc.path, doc.label.as_deref(), None)
            .with_context(|| format!("loading document {}", doc.path.display()))?;
    }
    Ok(corpus)
}

fn scorer(config: &AppConfig) -> Result<LexiconScorer> {
    match &config.lexicon {
        Some(p) => LexiconScorer::from_json_file(p)
            .with_context(|| format!("loading lexicon from {}", p.display())),
        None => Ok(LexiconScorer::new()),
    }
}

/// Run every enabled view over an already-loaded corpus.
pub fn run_views(config: &AppConfig, corpus: &Corpus, renderer: &dyn Renderer) -> Result<RunReport> {
    let mut report = RunReport {
        documents: corpus
            .store()
            .document_labels(crate::corpus::metric::RAW_TEXT)
            .len(),
        ..Default::default()
    };

    if config.views.flow_graph {
        let builder = FlowGraphBuilder::new().with_threshold(config.vocabulary.edge_threshold);
        let graph = corpus.flow_graph_with(&config.vocabulary.source(), builder)?;
        renderer.render_flow(&SankeyFigure::from_graph(&graph))?;
        info!(nodes = graph.nodes.len(), edges = graph.edges.len(), "flow graph rendered");
        report.flow_graph = Some(graph);
    }

    if config.views.sentiment_breakdown {
        let scores = corpus.sentiment_scores(scorer(config)?)?;
        renderer.render_breakdown(&SentimentBreakdown::from_scores(&scores))?;
        info!(documents = scores.len(), "sentiment breakdown rendered");
        report.sentiment = Some(scores);
    }

    if config.views.sentiment_heatmap {
        let matrix = corpus.sentiment_matrix(scorer(config)?)?;
        renderer.render_heatmap(&SentimentHeatmap::from_matrix(&matrix))?;
        info!(documents = matrix.documents.len(), "sentiment heatmap rendered");
        report.heatmap = Some(matrix);
    }

    Ok(report)
}

/// Load and render in one go.
pub fn run(config: &AppConfig, renderer: &dyn Renderer) -> Result<RunReport> {
    let corpus = load_corpus(config)?;
    run_views(config, &corpus, renderer)
}

// src/render/mod.rs
//! Figure descriptions handed to drawing back-ends, plus the [`Renderer`] seam.
//!
//! Nothing here draws pixels. Each figure carries exactly what a plotting library
//! needs (labels, values, titles, axis bounds, annotations) so the back-end stays a
//! thin adapter. Renderer settings arrive through [`RenderConfig`]; there is no
//! process-wide default.

pub mod json;
pub mod text;

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::flow::FlowGraph;
use crate::sentiment::{SentimentMatrix, SentimentMetric, SentimentScore};

pub use json::JsonRenderer;

fn default_output_dir() -> PathBuf {
    PathBuf::from("out")
}

fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Directory rendered artifacts are written to (created on demand).
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Pretty-print JSON artifacts.
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            pretty: default_pretty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyNodeStyle {
    pub pad: u32,
    pub thickness: u32,
    pub line_color: String,
    pub line_width: f32,
}

impl Default for SankeyNodeStyle {
    fn default() -> Self {
        Self {
            pad: 15,
            thickness: 20,
            line_color: "black".to_string(),
            line_width: 0.5,
        }
    }
}

/// Parallel link arrays, the shape Sankey back-ends consume.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SankeyLinks {
    pub source: Vec<usize>,
    pub target: Vec<usize>,
    pub value: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyFigure {
    pub title: String,
    pub font_size: u32,
    pub node: SankeyNodeStyle,
    pub labels: Vec<String>,
    pub links: SankeyLinks,
}

impl SankeyFigure {
    pub fn from_graph(graph: &FlowGraph) -> Self {
        let mut links = SankeyLinks::default();
        for e in &graph.edges {
            links.source.push(e.source);
            links.target.push(e.target);
            links.value.push(e.weight);
        }
        Self {
            title: "Most Common Words Sankey".to_string(),
            font_size: 10,
            node: SankeyNodeStyle::default(),
            labels: graph.nodes.clone(),
            links,
        }
    }
}

/// One bar chart per document: `neg`, `neu`, `pos`, `compound`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarPanel {
    pub title: String,
    pub bars: Vec<(String, f64)>,
    pub y_min: f64,
    pub y_max: f64,
    pub color: String,
}

impl BarPanel {
    pub fn for_document(label: &str, score: &SentimentScore) -> Self {
        let bars = SentimentMetric::ALL
            .iter()
            .map(|&m| (m.as_str().to_string(), score.get(m)))
            .collect();
        Self {
            title: format!("Sentiment Breakdown for {label}"),
            bars,
            y_min: 0.0,
            y_max: bar_upper_bound(score),
            color: "skyblue".to_string(),
        }
    }
}

/// Upper y bound: 10% headroom over the tallest proportion, never below 0.5.
pub fn bar_upper_bound(score: &SentimentScore) -> f64 {
    let tallest = score.neg.max(score.neu).max(score.pos);
    (tallest * 1.1).max(0.5)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentBreakdown {
    pub panels: Vec<BarPanel>,
}

impl SentimentBreakdown {
    pub fn from_scores(scores: &IndexMap<String, SentimentScore>) -> Self {
        Self {
            panels: scores
                .iter()
                .map(|(label, s)| BarPanel::for_document(label, s))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentHeatmap {
    pub title: String,
    pub color_map: String,
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    /// Column tick label rotation, degrees.
    pub column_label_rotation: f32,
    pub values: Vec<Vec<f64>>,
    /// Cell text, two decimals.
    pub annotations: Vec<Vec<String>>,
}

impl SentimentHeatmap {
    pub fn from_matrix(matrix: &SentimentMatrix) -> Self {
        let annotations = matrix
            .values
            .iter()
            .map(|row| row.iter().map(|v| format_cell(*v)).collect())
            .collect();
        Self {
            title: "Sentiment Heatmap per Document".to_string(),
            color_map: "coolwarm".to_string(),
            row_labels: matrix.metrics.iter().map(|m| m.as_str().to_string()).collect(),
            column_labels: matrix.documents.clone(),
            column_label_rotation: 45.0,
            values: matrix.values.clone(),
            annotations,
        }
    }
}

/// Two-decimal cell annotation.
pub fn format_cell(v: f64) -> String {
    format!("{v:.2}")
}

/// Rendering back-end. Implementations decide where figures go.
pub trait Renderer {
    fn render_flow(&self, figure: &SankeyFigure) -> Result<()>;
    fn render_breakdown(&self, figure: &SentimentBreakdown) -> Result<()>;
    fn render_heatmap(&self, figure: &SentimentHeatmap) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow::FlowEdge;

    #[test]
    fn sankey_links_mirror_edges() {
        let g = FlowGraph {
            nodes: vec!["d1".into(), "w".into()],
            edges: vec![FlowEdge {
                source: 0,
                target: 1,
                weight: 4,
            }],
            document_count: 1,
        };
        let fig = SankeyFigure::from_graph(&g);
        assert_eq!(fig.labels, vec!["d1", "w"]);
        assert_eq!(fig.links.source, vec![0]);
        assert_eq!(fig.links.target, vec![1]);
        assert_eq!(fig.links.value, vec![4]);
        assert_eq!(fig.node.pad, 15);
        assert_eq!(fig.node.thickness, 20);
    }

    #[test]
    fn bar_bound_has_floor_and_headroom() {
        let low = SentimentScore {
            neg: 0.1,
            neu: 0.2,
            pos: 0.1,
            compound: 0.9,
        };
        assert_eq!(bar_upper_bound(&low), 0.5);

        let high = SentimentScore {
            neg: 0.0,
            neu: 0.8,
            pos: 0.2,
            compound: 0.3,
        };
        assert!((bar_upper_bound(&high) - 0.88).abs() < 1e-12);
    }

    #[test]
    fn bar_panel_lists_four_fields_in_order() {
        let s = SentimentScore {
            neg: 0.1,
            neu: 0.7,
            pos: 0.2,
            compound: 0.4,
        };
        let p = BarPanel::for_document("Post 1", &s);
        assert_eq!(p.title, "Sentiment Breakdown for Post 1");
        let names: Vec<_> = p.bars.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["neg", "neu", "pos", "compound"]);
    }

    #[test]
    fn heatmap_annotations_use_two_decimals() {
        let m = SentimentMatrix {
            metrics: vec![SentimentMetric::Neg, SentimentMetric::Compound],
            documents: vec!["a".into(), "b".into()],
            values: vec![vec![0.0, 0.126], vec![-0.5, 0.999]],
        };
        let h = SentimentHeatmap::from_matrix(&m);
        assert_eq!(h.row_labels, vec!["neg", "compound"]);
        assert_eq!(h.annotations[0], vec!["0.00", "0.13"]);
        assert_eq!(h.annotations[1], vec!["-0.50", "1.00"]);
    }
}

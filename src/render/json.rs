// src/render/json.rs
//! Writes each figure as a JSON document into the configured output directory.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use super::{RenderConfig, Renderer, SankeyFigure, SentimentBreakdown, SentimentHeatmap};
use crate::error::{CorpusError, Result};

pub const SANKEY_FILE: &str = "sankey.json";
pub const BREAKDOWN_FILE: &str = "sentiment_breakdown.json";
pub const HEATMAP_FILE: &str = "sentiment_heatmap.json";

#[derive(Debug, Clone)]
pub struct JsonRenderer {
    config: RenderConfig,
}

impl JsonRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    fn write<T: Serialize>(&self, file: &str, value: &T) -> Result<PathBuf> {
        let dir = &self.config.output_dir;
        fs::create_dir_all(dir).map_err(|source| CorpusError::Render {
            path: dir.clone(),
            source,
        })?;

        let body = if self.config.pretty {
            serde_json::to_vec_pretty(value)?
        } else {
            serde_json::to_vec(value)?
        };

        let path = dir.join(file);
        fs::write(&path, body).map_err(|source| CorpusError::Render {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "wrote figure");
        Ok(path)
    }
}

impl Renderer for JsonRenderer {
    fn render_flow(&self, figure: &SankeyFigure) -> Result<()> {
        self.write(SANKEY_FILE, figure).map(|_| ())
    }

    fn render_breakdown(&self, figure: &SentimentBreakdown) -> Result<()> {
        self.write(BREAKDOWN_FILE, figure).map(|_| ())
    }

    fn render_heatmap(&self, figure: &SentimentHeatmap) -> Result<()> {
        self.write(HEATMAP_FILE, figure).map(|_| ())
    }
}

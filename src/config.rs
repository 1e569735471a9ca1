// src/config.rs
//! Run configuration: which stop words and documents to load, how the vocabulary is
//! chosen, which views to produce and where renderers write.
//!
//! Lookup order for [`load_config_default`]:
//! 1) `$CORPUS_CONFIG_PATH`
//! 2) `config/corpus.toml`
//! 3) `config/corpus.json`
//! 4) built-in defaults (fourteen `reddit_postN.json` files, Sankey only)

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::flow::DEFAULT_EDGE_THRESHOLD;
use crate::render::RenderConfig;
use crate::vocabulary::VocabularySource;

pub const ENV_CONFIG_PATH: &str = "CORPUS_CONFIG_PATH";
pub const DEFAULT_TOML_PATH: &str = "config/corpus.toml";
pub const DEFAULT_JSON_PATH: &str = "config/corpus.json";

fn default_top_k() -> usize {
    5
}
fn default_edge_threshold() -> u64 {
    DEFAULT_EDGE_THRESHOLD
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    pub path: PathBuf,
    /// Falls back to the path when absent.
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyConfig {
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// Fixed word list; when set, `top_k` is ignored.
    #[serde(default)]
    pub words: Option<Vec<String>>,
    /// Counts must be strictly greater than this to become an edge.
    #[serde(default = "default_edge_threshold")]
    pub edge_threshold: u64,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            top_k: default_top_k(),
            words: None,
            edge_threshold: default_edge_threshold(),
        }
    }
}

impl VocabularyConfig {
    pub fn source(&self) -> VocabularySource {
        match &self.words {
            Some(words) => VocabularySource::Explicit(words.clone()),
            None => VocabularySource::TopK(self.top_k),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewsConfig {
    #[serde(default = "default_true")]
    pub flow_graph: bool,
    #[serde(default)]
    pub sentiment_breakdown: bool,
    #[serde(default)]
    pub sentiment_heatmap: bool,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            flow_graph: true,
            sentiment_breakdown: false,
            sentiment_heatmap: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub stop_words: Option<PathBuf>,
    #[serde(default)]
    pub documents: Vec<DocumentEntry>,
    #[serde(default)]
    pub vocabulary: VocabularyConfig,
    #[serde(default)]
    pub views: ViewsConfig,
    #[serde(default)]
    pub render: RenderConfig,
    /// Custom `{ "word": valence }` lexicon for the default scorer.
    #[serde(default)]
    pub lexicon: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let documents = (1..=14)
            .map(|i| DocumentEntry {
                path: PathBuf::from(format!("reddit_post{i}.json")),
                label: Some(format!("Post {i}")),
            })
            .collect();
        Self {
            stop_words: Some(PathBuf::from("stopwords.txt")),
            documents,
            vocabulary: VocabularyConfig::default(),
            views: ViewsConfig::default(),
            render: RenderConfig::default(),
            lexicon: None,
        }
    }
}

/// Load from an explicit path; format picked by extension (`.toml` / `.json`),
/// content sniffing otherwise.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config from {}", path.display()))?;
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    parse_config(&content, ext.as_str())
        .with_context(|| format!("parsing config {}", path.display()))
}

/// Env var, then `config/corpus.toml`, then `config/corpus.json`, then defaults.
pub fn load_config_default() -> Result<AppConfig> {
    if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
        let pb = PathBuf::from(p);
        if pb.exists() {
            return load_config_from(&pb);
        } else {
            return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
        }
    }
    let toml_p = PathBuf::from(DEFAULT_TOML_PATH);
    if toml_p.exists() {
        return load_config_from(&toml_p);
    }
    let json_p = PathBuf::from(DEFAULT_JSON_PATH);
    if json_p.exists() {
        return load_config_from(&json_p);
    }
    Ok(AppConfig::default())
}

fn parse_config(s: &str, hint_ext: &str) -> Result<AppConfig> {
    match hint_ext {
        "toml" => Ok(toml::from_str(s)?),
        "json" => Ok(serde_json::from_str(s)?),
        _ => {
            if s.trim_start().starts_with('{') {
                Ok(serde_json::from_str(s)?)
            } else {
                toml::from_str(s).map_err(|e| anyhow!("unsupported config format: {e}"))
            }
        }
    }
}

//! Lexicon-based polarity scorer.
//!
//! Each token is looked up in a word → valence lexicon (roughly -4..=4). A negator
//! within the previous three tokens dampens and flips the valence. Proportions:
//! a positive valence `v` adds `v + 1` to the positive mass, a negative one adds
//! `v - 1` to the negative mass, and an unknown word counts as one neutral unit;
//! the three masses are divided by their total. The compound score squashes the
//! summed valence into `[-1, 1]` with `s / sqrt(s² + ALPHA)`.

use std::collections::HashMap;
use std::sync::Arc;
use std::{fs, io, path::Path};

use once_cell::sync::Lazy;

use super::{PolarityScorer, SentimentScore};
use crate::error::ScoringError;

const NEGATION_SCALAR: f64 = -0.74;
const NEGATION_WINDOW: usize = 3;
const ALPHA: f64 = 15.0;

static DEFAULT_LEXICON: Lazy<Arc<HashMap<String, f64>>> = Lazy::new(|| {
    let raw = include_str!("../../sentiment_lexicon.json");
    Arc::new(serde_json::from_str::<HashMap<String, f64>>(raw).expect("valid sentiment lexicon"))
});

#[derive(Debug, Clone)]
pub struct LexiconScorer {
    lexicon: Arc<HashMap<String, f64>>,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self {
            lexicon: Arc::clone(&DEFAULT_LEXICON),
        }
    }
}

impl LexiconScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom lexicon; keys are matched against lowercased tokens.
    pub fn with_lexicon(lexicon: HashMap<String, f64>) -> Self {
        let lexicon = lexicon
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        Self {
            lexicon: Arc::new(lexicon),
        }
    }

    /// Load a JSON object `{ "word": valence, ... }`.
    pub fn from_json_file(path: &Path) -> io::Result<Self> {
        let bytes = fs::read(path)?;
        let map: HashMap<String, f64> = serde_json::from_slice(&bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Self::with_lexicon(map))
    }

    #[inline]
    fn valence(&self, w: &str) -> f64 {
        self.lexicon.get(w).copied().unwrap_or(0.0)
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity_scores(&self, text: &str) -> Result<SentimentScore, ScoringError> {
        let tokens: Vec<String> = tokenize(text).collect();
        if tokens.is_empty() {
            return Err(ScoringError::EmptyText);
        }

        let mut sum = 0.0f64;
        let mut pos_mass = 0.0f64;
        let mut neg_mass = 0.0f64;
        let mut neutral = 0.0f64;

        for i in 0..tokens.len() {
            let mut v = self.valence(tokens[i].as_str());
            let negated =
                (1..=NEGATION_WINDOW).any(|k| i >= k && is_negator(tokens[i - k].as_str()));
            if negated {
                v *= NEGATION_SCALAR;
            }

            sum += v;
            if v > 0.0 {
                pos_mass += v + 1.0;
            } else if v < 0.0 {
                neg_mass += v - 1.0;
            } else {
                neutral += 1.0;
            }
        }

        let total = pos_mass + neg_mass.abs() + neutral;
        Ok(SentimentScore {
            neg: (neg_mass / total).abs(),
            neu: neutral / total,
            pos: pos_mass / total,
            compound: normalize(sum),
        })
    }
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

/// Whitespace tokens, lowercased, with surrounding punctuation trimmed.
/// Inner apostrophes survive so contractions like "isn't" stay intact.
fn tokenize(s: &str) -> impl Iterator<Item = String> + '_ {
    s.split_whitespace()
        .map(|t| t.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
}

fn is_negator(tok: &str) -> bool {
    matches!(
        tok,
        "not"
            | "no"
            | "never"
            | "nothing"
            | "nobody"
            | "none"
            | "neither"
            | "nor"
            | "without"
            | "cannot"
            | "isn't"
            | "wasn't"
            | "aren't"
            | "weren't"
            | "don't"
            | "doesn't"
            | "didn't"
            | "won't"
            | "can't"
            | "couldn't"
            | "shouldn't"
            | "wouldn't"
            | "dont"
            | "doesnt"
            | "didnt"
            | "isnt"
            | "cant"
            | "wont"
    )
}

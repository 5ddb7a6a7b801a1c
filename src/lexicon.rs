use crate::error::{EngineError, Result};
use std::collections::HashMap;
use std::path::Path;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "amazing", "wonderful", "fantastic", "awesome", "brilliant",
    "outstanding", "superb", "perfect", "love", "like", "enjoy", "happy", "pleased", "satisfied",
    "impressive", "remarkable", "spectacular", "marvelous", "terrific", "incredible", "best",
    "favorite", "recommend", "enjoyable", "entertaining",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "disgusting", "hate", "dislike", "boring", "dull",
    "disappointing", "poor", "worst", "pathetic", "useless", "annoying", "frustrating", "sad",
    "angry", "upset", "depressing", "mediocre", "uninspiring", "inadequate", "waste", "stupid",
    "ridiculous", "pointless", "confusing",
];

/// Immutable token -> polarity weight table.
///
/// Constructed once at startup and only read afterwards, so concurrent
/// lookups need no locking.
#[derive(Debug, Clone)]
pub struct Lexicon {
    weights: HashMap<String, f64>,
}

impl Lexicon {
    /// Built-in word lists at weight +1.0 / -1.0
    pub fn builtin() -> Self {
        let mut weights = HashMap::with_capacity(POSITIVE_WORDS.len() + NEGATIVE_WORDS.len());

        for word in POSITIVE_WORDS {
            weights.insert((*word).to_string(), 1.0);
        }
        for word in NEGATIVE_WORDS {
            weights.insert((*word).to_string(), -1.0);
        }

        Self { weights }
    }

    /// Load a lexicon from a JSON object of `{token: weight}`. Any malformed
    /// content is a startup-fatal error, never a per-request one.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Lexicon(format!("Failed to read lexicon file: {}", e)))?;
        let weights: HashMap<String, f64> = serde_json::from_str(&content)
            .map_err(|e| EngineError::Lexicon(format!("Failed to parse lexicon: {}", e)))?;

        if weights.is_empty() {
            return Err(EngineError::Lexicon("Lexicon contains no entries".to_string()));
        }

        for (token, weight) in &weights {
            if token.trim().is_empty() {
                return Err(EngineError::Lexicon("Lexicon contains a blank token".to_string()));
            }
            if !weight.is_finite() {
                return Err(EngineError::Lexicon(format!(
                    "Non-finite weight for token '{}'",
                    token
                )));
            }
        }

        Ok(Self { weights })
    }

    pub fn lookup(&self, token: &str) -> Option<f64> {
        self.weights.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discrete sentiment label produced by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "positive"),
            Sentiment::Negative => write!(f, "negative"),
        }
    }
}

/// Classifier variant active for the process lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Trained,
    Heuristic,
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Trained => write!(f, "trained"),
            Variant::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// Lexicon diagnostics attached to every classification
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationDetails {
    pub positive_hits: usize,
    pub negative_hits: usize,
    pub total_tokens: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub details: ClassificationDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    /// Reserved for a future neutral band; neither classifier variant
    /// currently emits a neutral label, so this is always zero.
    pub neutral_count: usize,
    pub average_confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub results: Vec<ClassificationResult>,
    pub summary: BatchSummary,
}

/// Read-only engine metadata for status endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelInfo {
    pub active_variant: Variant,
    pub model_name: String,
    pub accuracy: Option<f64>,
    pub f1_score: Option<f64>,
    pub loaded_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_serializes_lowercase() {
        let json = serde_json::to_string(&Sentiment::Positive).unwrap();
        assert_eq!(json, "\"positive\"");

        let parsed: Sentiment = serde_json::from_str("\"negative\"").unwrap();
        assert_eq!(parsed, Sentiment::Negative);
    }

    #[test]
    fn test_classification_result_round_trip() {
        let result = ClassificationResult {
            sentiment: Sentiment::Negative,
            confidence: 0.75,
            details: ClassificationDetails {
                positive_hits: 0,
                negative_hits: 2,
                total_tokens: 5,
            },
        };

        let json = serde_json::to_string(&result).unwrap();
        let parsed: ClassificationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, result);
    }
}

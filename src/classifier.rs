use crate::artifact::ModelArtifact;
use crate::features::SparseFeatures;
use crate::models::{ClassificationDetails, Variant};
use ndarray::Array1;
use std::collections::HashMap;

/// Classifier selected once at startup; every request in a process lifetime
/// sees the same variant.
#[derive(Debug)]
pub enum SentimentClassifier {
    Trained(TrainedClassifier),
    Heuristic(HeuristicClassifier),
}

impl SentimentClassifier {
    pub fn variant(&self) -> Variant {
        match self {
            SentimentClassifier::Trained(_) => Variant::Trained,
            SentimentClassifier::Heuristic(_) => Variant::Heuristic,
        }
    }
}

/// Deterministic lexicon-count classifier, always available.
#[derive(Debug, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    /// `(positive_hits - negative_hits) / max(1, total_tokens)`; the floored
    /// denominator keeps empty token sequences at a raw score of 0.
    pub fn score(&self, features: &ClassificationDetails) -> f64 {
        let spread = features.positive_hits as f64 - features.negative_hits as f64;
        spread / features.total_tokens.max(1) as f64
    }
}

/// Linear decision function over a validated model artifact.
#[derive(Debug)]
pub struct TrainedClassifier {
    vocabulary: HashMap<String, usize>,
    weights: Array1<f64>,
    bias: f64,
}

impl TrainedClassifier {
    /// The artifact must already have passed structural validation; index
    /// bounds are guaranteed there, not re-checked per request.
    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        Self {
            vocabulary: artifact.vocabulary,
            weights: Array1::from(artifact.weights),
            bias: artifact.bias,
        }
    }

    pub fn vocabulary(&self) -> &HashMap<String, usize> {
        &self.vocabulary
    }

    pub fn score(&self, features: &SparseFeatures) -> f64 {
        let dot: f64 = features
            .indices
            .iter()
            .zip(&features.values)
            .map(|(&index, &value)| self.weights[index] * value)
            .sum();

        dot + self.bias
    }
}

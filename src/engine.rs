use crate::artifact::ArtifactStore;
use crate::batch;
use crate::classifier::{HeuristicClassifier, SentimentClassifier, TrainedClassifier};
use crate::config::EngineConfig;
use crate::confidence;
use crate::error::Result;
use crate::features;
use crate::lexicon::Lexicon;
use crate::models::{BatchResult, ClassificationResult, ModelInfo, Variant};
use crate::normalizer::Normalizer;
use chrono::Utc;
use tracing::{debug, info};

/// Sentiment inference engine.
///
/// All state is constructed at startup and read-only afterwards, so a single
/// instance can be shared by reference (`Arc`) across any number of
/// concurrent request handlers. Inference itself is synchronous, pure CPU
/// work with no suspension points.
pub struct SentimentEngine {
    normalizer: Normalizer,
    lexicon: Lexicon,
    classifier: SentimentClassifier,
    info: ModelInfo,
}

impl SentimentEngine {
    /// Build the engine: a malformed lexicon is fatal, while a missing or
    /// invalid model artifact degrades to the heuristic classifier for the
    /// process lifetime.
    pub fn new(config: &EngineConfig) -> Result<Self> {
        config.validate()?;

        let lexicon = match &config.lexicon_path {
            Some(path) => Lexicon::from_file(path)?,
            None => Lexicon::builtin(),
        };
        info!("Lexicon ready with {} entries", lexicon.len());

        let (classifier, info) = match ArtifactStore::load(&config.model_path) {
            Some(artifact) => {
                let info = ModelInfo {
                    active_variant: Variant::Trained,
                    model_name: artifact.metadata.model_name.clone(),
                    accuracy: Some(artifact.metadata.accuracy),
                    f1_score: Some(artifact.metadata.f1_score),
                    loaded_at: Utc::now(),
                };
                let classifier =
                    SentimentClassifier::Trained(TrainedClassifier::from_artifact(artifact));
                (classifier, info)
            }
            None => {
                let info = ModelInfo {
                    active_variant: Variant::Heuristic,
                    model_name: "lexicon-heuristic".to_string(),
                    accuracy: None,
                    f1_score: None,
                    loaded_at: Utc::now(),
                };
                (SentimentClassifier::Heuristic(HeuristicClassifier), info)
            }
        };
        info!("Sentiment engine ready (variant: {})", info.active_variant);

        Ok(Self {
            normalizer: Normalizer::new(),
            lexicon,
            classifier,
            info,
        })
    }

    /// Classify a single pre-validated text. Never fails for well-formed
    /// input; an empty-after-normalization text yields the tie-break result.
    pub fn classify_one(&self, text: &str) -> ClassificationResult {
        let tokens = self.normalizer.normalize(text);
        let details = features::lexicon_features(&tokens, &self.lexicon);

        let raw_score = match &self.classifier {
            SentimentClassifier::Heuristic(classifier) => classifier.score(&details),
            SentimentClassifier::Trained(classifier) => {
                let vector = features::vocabulary_features(&tokens, classifier.vocabulary());
                classifier.score(&vector)
            }
        };

        let (sentiment, confidence) = confidence::derive(raw_score, self.info.active_variant);
        debug!(
            "Classified {} tokens: {} (confidence: {:.3})",
            details.total_tokens, sentiment, confidence
        );

        ClassificationResult {
            sentiment,
            confidence,
            details,
        }
    }

    /// Run the pipeline independently over each text. `results[i]` always
    /// corresponds to `texts[i]`.
    pub fn classify_batch(&self, texts: &[String]) -> BatchResult {
        let results: Vec<ClassificationResult> = texts
            .iter()
            .map(|text| self.classify_one(text))
            .collect();
        let summary = batch::summarize(&results);

        BatchResult { results, summary }
    }

    /// Read-only metadata for status endpoints
    pub fn metadata(&self) -> &ModelInfo {
        &self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;
    use std::path::PathBuf;

    fn heuristic_engine() -> SentimentEngine {
        let config = EngineConfig {
            model_path: PathBuf::from("no/such/model.json"),
            lexicon_path: None,
        };
        SentimentEngine::new(&config).unwrap()
    }

    #[test]
    fn test_missing_artifact_falls_back_to_heuristic() {
        let engine = heuristic_engine();

        assert_eq!(engine.metadata().active_variant, Variant::Heuristic);
        assert_eq!(engine.metadata().accuracy, None);
    }

    #[test]
    fn test_positive_classification() {
        let engine = heuristic_engine();
        let result = engine.classify_one("This movie was absolutely fantastic!");

        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.details.positive_hits, 1);
        assert_eq!(result.details.negative_hits, 0);
        assert_eq!(result.details.total_tokens, 3);
    }

    #[test]
    fn test_empty_text_ties_to_positive() {
        let engine = heuristic_engine();
        let result = engine.classify_one("...");

        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.confidence, 0.5);
        assert_eq!(result.details.total_tokens, 0);
    }

    #[test]
    fn test_classify_one_is_idempotent() {
        let engine = heuristic_engine();
        let text = "An awful, boring waste of a wonderful premise";

        assert_eq!(engine.classify_one(text), engine.classify_one(text));
    }

    #[test]
    fn test_batch_preserves_input_order() {
        let engine = heuristic_engine();
        let texts = vec!["great movie".to_string(), "awful movie".to_string()];

        let batch = engine.classify_batch(&texts);
        assert_eq!(batch.results.len(), 2);
        assert_eq!(batch.results[0].sentiment, Sentiment::Positive);
        assert_eq!(batch.results[1].sentiment, Sentiment::Negative);
    }
}

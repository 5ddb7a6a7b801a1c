use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Training metrics recorded alongside the persisted model
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_name: String,
    pub accuracy: f64,
    pub f1_score: f64,
}

/// Persisted weights/vocabulary bundle for the trained linear classifier.
///
/// Structural invariant: `weights.len() == vocabulary.len()`, with every
/// feature index in bounds and unique.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub vocabulary: HashMap<String, usize>,
    pub weights: Vec<f64>,
    pub bias: f64,
    pub metadata: ModelMetadata,
}

impl ModelArtifact {
    pub fn validate(&self) -> Result<()> {
        if self.vocabulary.is_empty() {
            return Err(EngineError::Artifact("Vocabulary is empty".to_string()));
        }

        if self.weights.len() != self.vocabulary.len() {
            return Err(EngineError::Artifact(format!(
                "Weight count {} does not match vocabulary size {}",
                self.weights.len(),
                self.vocabulary.len()
            )));
        }

        let mut seen = HashSet::with_capacity(self.vocabulary.len());
        for (token, &index) in &self.vocabulary {
            if index >= self.weights.len() {
                return Err(EngineError::Artifact(format!(
                    "Feature index {} for token '{}' is out of bounds",
                    index, token
                )));
            }
            if !seen.insert(index) {
                return Err(EngineError::Artifact(format!(
                    "Duplicate feature index {}",
                    index
                )));
            }
        }

        if self.weights.iter().any(|weight| !weight.is_finite()) {
            return Err(EngineError::Artifact("Non-finite weight".to_string()));
        }
        if !self.bias.is_finite() {
            return Err(EngineError::Artifact("Non-finite bias".to_string()));
        }

        Ok(())
    }
}

pub struct ArtifactStore;

impl ArtifactStore {
    /// Load and validate the model artifact at `path`. Returns `None` when
    /// the artifact is absent or structurally invalid, which commits the
    /// process to the heuristic classifier for its lifetime.
    pub fn load(path: &Path) -> Option<ModelArtifact> {
        if !path.exists() {
            tracing::warn!(
                "Model artifact not found at {:?}, serving heuristic classifier",
                path
            );
            return None;
        }

        match Self::read(path) {
            Ok(artifact) => {
                tracing::info!(
                    "Loaded model artifact '{}' (accuracy: {:.4}, f1: {:.4})",
                    artifact.metadata.model_name,
                    artifact.metadata.accuracy,
                    artifact.metadata.f1_score
                );
                Some(artifact)
            }
            Err(e) => {
                tracing::warn!(
                    "Rejected model artifact at {:?}: {}; serving heuristic classifier",
                    path,
                    e
                );
                None
            }
        }
    }

    fn read(path: &Path) -> Result<ModelArtifact> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| EngineError::Artifact(format!("Failed to read artifact file: {}", e)))?;
        let artifact: ModelArtifact = serde_json::from_str(&content)
            .map_err(|e| EngineError::Artifact(format!("Failed to parse artifact: {}", e)))?;

        artifact.validate()?;
        Ok(artifact)
    }
}

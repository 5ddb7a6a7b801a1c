use crate::error::{EngineError, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Location of the trained model artifact. A missing or invalid file is
    /// not fatal; the engine falls back to the heuristic classifier.
    pub model_path: PathBuf,
    /// Optional lexicon file overriding the built-in word lists. A malformed
    /// file here is fatal at startup.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("models/sentiment_model.json"),
            lexicon_path: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env_or_default() -> Self {
        let mut config = Self::default();

        if let Ok(model_path) = std::env::var("SENTIMENT_MODEL_PATH") {
            config.model_path = PathBuf::from(model_path);
        }

        if let Ok(lexicon_path) = std::env::var("SENTIMENT_LEXICON_PATH") {
            config.lexicon_path = Some(PathBuf::from(lexicon_path));
        }

        config
    }

    pub fn validate(&self) -> Result<()> {
        if self.model_path.as_os_str().is_empty() {
            return Err(EngineError::Config(
                "Model path cannot be empty".to_string(),
            ));
        }

        if let Some(lexicon_path) = &self.lexicon_path {
            if lexicon_path.as_os_str().is_empty() {
                return Err(EngineError::Config(
                    "Lexicon path cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

// Sentiment Inference Engine Library

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod error;
pub mod config;
pub mod models;
pub mod normalizer;
pub mod lexicon;
pub mod features;
pub mod classifier;
pub mod confidence;
pub mod artifact;
pub mod batch;
pub mod engine;

pub use artifact::{ArtifactStore, ModelArtifact};
pub use config::EngineConfig;
pub use engine::SentimentEngine;
pub use error::{EngineError, Result};
pub use models::{
    BatchResult, BatchSummary, ClassificationDetails, ClassificationResult, ModelInfo, Sentiment,
    Variant,
};

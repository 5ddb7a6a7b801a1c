use anyhow::Result;
use sentiment_engine::{EngineConfig, SentimentEngine};
use std::io::BufRead;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = EngineConfig::from_env_or_default();

    let engine = SentimentEngine::new(&config)?;
    let metadata = engine.metadata();
    info!(
        "Starting sentiment-engine v{} (model: {}, variant: {})",
        sentiment_engine::VERSION,
        metadata.model_name,
        metadata.active_variant
    );
    if let (Some(accuracy), Some(f1_score)) = (metadata.accuracy, metadata.f1_score) {
        info!("Accuracy: {:.4}, F1-Score: {:.4}", accuracy, f1_score);
    }

    // One input text per stdin line; blank lines are skipped.
    let stdin = std::io::stdin();
    let texts: Vec<String> = stdin
        .lock()
        .lines()
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let batch = engine.classify_batch(&texts);
    println!("{}", serde_json::to_string_pretty(&batch)?);

    Ok(())
}

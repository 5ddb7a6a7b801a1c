use crate::models::{BatchSummary, ClassificationResult, Sentiment};

/// Fold per-item results into summary statistics. `total` always equals the
/// number of results; the average is the plain arithmetic mean of per-item
/// confidences.
pub fn summarize(results: &[ClassificationResult]) -> BatchSummary {
    let mut positive_count = 0;
    let mut negative_count = 0;
    let mut confidence_sum = 0.0;

    for result in results {
        match result.sentiment {
            Sentiment::Positive => positive_count += 1,
            Sentiment::Negative => negative_count += 1,
        }
        confidence_sum += result.confidence;
    }

    let average_confidence = if results.is_empty() {
        0.0
    } else {
        confidence_sum / results.len() as f64
    };

    BatchSummary {
        total: results.len(),
        positive_count,
        negative_count,
        neutral_count: 0,
        average_confidence,
    }
}

use crate::models::{Sentiment, Variant};

/// Steepness of the logistic squashing applied to trained raw scores. A raw
/// margin of 1.5 maps to roughly 0.90 confidence.
pub const LOGISTIC_STEEPNESS: f64 = 1.5;

/// Map a raw classifier score to a label and a bounded confidence.
///
/// A raw score of exactly 0 (all-neutral or all-OOV text) resolves to
/// positive at confidence 0.5. Confidence expresses certainty in the
/// predicted label, so both paths stay within [0.5, 1.0].
pub fn derive(raw_score: f64, variant: Variant) -> (Sentiment, f64) {
    let sentiment = if raw_score >= 0.0 {
        Sentiment::Positive
    } else {
        Sentiment::Negative
    };

    let magnitude = raw_score.abs();
    let confidence = match variant {
        // Heuristic raw scores live in [-1, 1]; rescale linearly onto [0.5, 1].
        Variant::Heuristic => (0.5 + magnitude / 2.0).min(1.0),
        Variant::Trained => 1.0 / (1.0 + (-LOGISTIC_STEEPNESS * magnitude).exp()),
    };

    (sentiment, confidence)
}

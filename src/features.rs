use crate::lexicon::Lexicon;
use crate::models::ClassificationDetails;
use std::collections::HashMap;

/// Sparse feature vector over a trained model's vocabulary. Indices are
/// strictly increasing; values are term frequencies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseFeatures {
    pub indices: Vec<usize>,
    pub values: Vec<f64>,
}

/// Count lexicon hits, sign-partitioned by weight. Tokens absent from the
/// lexicon contribute nothing. O(tokens) via hash lookup.
pub fn lexicon_features(tokens: &[String], lexicon: &Lexicon) -> ClassificationDetails {
    let mut features = ClassificationDetails {
        total_tokens: tokens.len(),
        ..Default::default()
    };

    for token in tokens {
        match lexicon.lookup(token) {
            Some(weight) if weight > 0.0 => features.positive_hits += 1,
            Some(weight) if weight < 0.0 => features.negative_hits += 1,
            _ => {}
        }
    }

    features
}

/// Build a term-frequency vector indexed by the artifact vocabulary.
/// Out-of-vocabulary tokens are dropped and contribute zero signal.
pub fn vocabulary_features(
    tokens: &[String],
    vocabulary: &HashMap<String, usize>,
) -> SparseFeatures {
    let mut counts: HashMap<usize, f64> = HashMap::new();

    for token in tokens {
        if let Some(&index) = vocabulary.get(token) {
            *counts.entry(index).or_insert(0.0) += 1.0;
        }
    }

    let mut entries: Vec<(usize, f64)> = counts.into_iter().collect();
    entries.sort_unstable_by_key(|&(index, _)| index);

    let (indices, values) = entries.into_iter().unzip();
    SparseFeatures { indices, values }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_lexicon_features_partitions_by_sign() {
        let lexicon = Lexicon::builtin();
        let features = lexicon_features(&tokens(&["great", "movie", "awful"]), &lexicon);

        assert_eq!(features.positive_hits, 1);
        assert_eq!(features.negative_hits, 1);
        assert_eq!(features.total_tokens, 3);
    }

    #[test]
    fn test_lexicon_features_ignores_oov_tokens() {
        let lexicon = Lexicon::builtin();
        let features = lexicon_features(&tokens(&["zxqv", "movie"]), &lexicon);

        assert_eq!(features.positive_hits, 0);
        assert_eq!(features.negative_hits, 0);
        assert_eq!(features.total_tokens, 2);
    }

    #[test]
    fn test_lexicon_features_empty_sequence() {
        let lexicon = Lexicon::builtin();
        let features = lexicon_features(&[], &lexicon);

        assert_eq!(features, ClassificationDetails::default());
    }

    #[test]
    fn test_vocabulary_features_counts_and_orders() {
        let vocabulary: HashMap<String, usize> =
            [("great".to_string(), 2), ("movie".to_string(), 0)].into();
        let features =
            vocabulary_features(&tokens(&["great", "movie", "great", "zxqv"]), &vocabulary);

        assert_eq!(features.indices, vec![0, 2]);
        assert_eq!(features.values, vec![1.0, 2.0]);
    }

    #[test]
    fn test_vocabulary_features_all_oov() {
        let vocabulary: HashMap<String, usize> = [("great".to_string(), 0)].into();
        let features = vocabulary_features(&tokens(&["terrible", "film"]), &vocabulary);

        assert_eq!(features, SparseFeatures::default());
    }
}

use regex::Regex;
use std::collections::HashSet;

/// Closed English stop-word set. Contains no contractions, so negated forms
/// like "wasn't" survive tokenization.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "then", "else", "when", "while", "of", "at", "by",
    "for", "with", "about", "into", "through", "during", "before", "after", "above", "below",
    "to", "from", "again", "once", "here", "there", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "only", "own", "same", "so", "than", "too", "very", "can",
    "will", "just", "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had",
    "having", "do", "does", "did", "doing", "he", "she", "it", "they", "them", "his", "her",
    "its", "their", "this", "that", "these", "those", "me", "my", "we", "us", "our", "you",
    "your", "what", "which", "who", "whom", "as", "until", "because", "on", "in", "out", "off",
    "over", "under",
];

const MIN_TOKEN_LENGTH: usize = 2;

/// Cleans raw text into a canonical lowercase token sequence.
///
/// Pure and deterministic: the same input always yields the same tokens, and
/// an empty output is valid (all tokens filtered).
pub struct Normalizer {
    tag_regex: Regex,
    punctuation_regex: Regex,
    stop_words: HashSet<&'static str>,
}

impl Normalizer {
    pub fn new() -> Self {
        let tag_regex = Regex::new(r"<[^>]*>").unwrap();
        // Apostrophes are kept so contractions stay intact; everything else
        // outside lowercase alphanumerics becomes a separator.
        let punctuation_regex = Regex::new(r"[^a-z0-9'\s]+").unwrap();

        Self {
            tag_regex,
            punctuation_regex,
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    pub fn normalize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let stripped = self.tag_regex.replace_all(&lowered, " ");
        let cleaned = self.punctuation_regex.replace_all(&stripped, " ");

        cleaned
            .split_whitespace()
            .map(|word| word.trim_matches('\''))
            .filter(|word| word.len() >= MIN_TOKEN_LENGTH && !self.stop_words.contains(*word))
            .map(|word| word.to_string())
            .collect()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let normalizer = Normalizer::new();
        let tokens = normalizer.normalize("Terrible, terrible film.");

        assert_eq!(tokens, vec!["terrible", "terrible", "film"]);
    }

    #[test]
    fn test_preserves_internal_apostrophes() {
        let normalizer = Normalizer::new();
        let tokens = normalizer.normalize("It wasn't 'good' at all");

        assert!(tokens.contains(&"wasn't".to_string()));
        // Quoting apostrophes are trimmed from token edges
        assert!(tokens.contains(&"good".to_string()));
    }

    #[test]
    fn test_strips_markup_remnants() {
        let normalizer = Normalizer::new();
        let tokens = normalizer.normalize("Great movie<br />loved it");

        assert_eq!(tokens, vec!["great", "movie", "loved"]);
    }

    #[test]
    fn test_filters_stop_words_and_short_tokens() {
        let normalizer = Normalizer::new();
        let tokens = normalizer.normalize("This movie was absolutely fantastic!");

        assert_eq!(tokens, vec!["movie", "absolutely", "fantastic"]);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let normalizer = Normalizer::new();

        assert!(normalizer.normalize("").is_empty());
        assert!(normalizer.normalize("...!!!").is_empty());
        assert!(normalizer.normalize("it was the").is_empty());
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let normalizer = Normalizer::new();
        let text = "An Absolutely   SPECTACULAR story, truly!";

        assert_eq!(normalizer.normalize(text), normalizer.normalize(text));
    }
}

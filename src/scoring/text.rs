//! Text normalization for the lexical scoring pipeline

use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

/// Normalizes free text into the token stream fed to TF-IDF vectorization.
///
/// Pipeline: lowercase, strip non-alphanumeric characters, collapse
/// whitespace, tokenize, drop stop words and short tokens, stem.
pub struct TextNormalizer {
    stop_words: HashSet<String>,
    non_word_regex: Regex,
    whitespace_regex: Regex,
    stemmer: Stemmer,
    min_token_length: usize,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextNormalizer {
    pub fn new() -> Self {
        Self::with_min_token_length(3)
    }

    pub fn with_min_token_length(min_token_length: usize) -> Self {
        let stop_words = Self::create_stop_words();

        let non_word_regex = Regex::new(r"\W").expect("Invalid non-word regex");
        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");

        Self {
            stop_words,
            non_word_regex,
            whitespace_regex,
            stemmer: Stemmer::create(Algorithm::English),
            min_token_length,
        }
    }

    /// Normalize text into stemmed tokens.
    pub fn normalize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        let stripped = self.non_word_regex.replace_all(&lowered, " ");
        let collapsed = self.whitespace_regex.replace_all(stripped.trim(), " ");

        collapsed
            .unicode_words()
            .filter(|word| {
                !self.stop_words.contains(*word)
                    && word.chars().count() >= self.min_token_length
            })
            .map(|word| self.stemmer.stem(word).into_owned())
            .collect()
    }

    /// Common English stop words
    fn create_stop_words() -> HashSet<String> {
        let stop_words = [
            "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "your",
            "yours", "yourself", "yourselves", "he", "him", "his", "himself", "she",
            "her", "hers", "herself", "it", "its", "itself", "they", "them", "their",
            "theirs", "themselves", "what", "which", "who", "whom", "this", "that",
            "these", "those", "am", "is", "are", "was", "were", "be", "been", "being",
            "have", "has", "had", "having", "do", "does", "did", "doing", "a", "an",
            "the", "and", "but", "if", "or", "because", "as", "until", "while", "of",
            "at", "by", "for", "with", "about", "against", "between", "into", "through",
            "during", "before", "after", "above", "below", "to", "from", "up", "down",
            "in", "out", "on", "off", "over", "under", "again", "further", "then",
            "once", "here", "there", "when", "where", "why", "how", "all", "any",
            "both", "each", "few", "more", "most", "other", "some", "such", "no",
            "nor", "not", "only", "own", "same", "so", "than", "too", "very", "s",
            "t", "can", "will", "just", "don", "should", "now", "d", "ll", "m", "o",
            "re", "ve", "y", "ain", "aren", "couldn", "didn", "doesn", "hadn", "hasn",
            "haven", "isn", "ma", "mightn", "mustn", "needn", "shan", "shouldn",
            "wasn", "weren", "won", "wouldn",
        ];

        stop_words.iter().map(|&s| s.to_string()).collect()
    }
}

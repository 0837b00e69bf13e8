//! Interchangeable similarity strategies
//!
//! The strategy is picked once at startup: embeddings when the model loads,
//! lexical TF-IDF otherwise. Strategies never fail; degenerate input and
//! per-call encoding problems degrade to 0.0.

use crate::scoring::embedding::EmbeddingModel;
use crate::scoring::text::TextNormalizer;
use crate::scoring::tfidf::TfidfVectors;
use log::debug;
use std::sync::Arc;

pub trait SimilarityStrategy: Send + Sync {
    /// Strategy name for logs and reports.
    fn name(&self) -> &'static str;

    /// Raw cosine similarity between the two texts, 0.0 for degenerate input.
    fn similarity(&self, job_description: &str, resume_text: &str) -> f32;
}

/// TF-IDF cosine similarity over normalized tokens.
pub struct LexicalStrategy {
    normalizer: TextNormalizer,
}

impl LexicalStrategy {
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
        }
    }

    pub fn with_min_token_length(min_token_length: usize) -> Self {
        Self {
            normalizer: TextNormalizer::with_min_token_length(min_token_length),
        }
    }
}

impl Default for LexicalStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl SimilarityStrategy for LexicalStrategy {
    fn name(&self) -> &'static str {
        "lexical"
    }

    fn similarity(&self, job_description: &str, resume_text: &str) -> f32 {
        let job_tokens = self.normalizer.normalize(job_description);
        let resume_tokens = self.normalizer.normalize(resume_text);

        if job_tokens.is_empty() || resume_tokens.is_empty() {
            debug!("No usable tokens after normalization, similarity 0.0");
            return 0.0;
        }

        match TfidfVectors::build(&job_tokens, &resume_tokens) {
            Some(vectors) => vectors.cosine(),
            None => 0.0,
        }
    }
}

/// Dense sentence-embedding similarity backed by a shared model.
pub struct EmbeddingStrategy {
    model: Arc<EmbeddingModel>,
}

impl EmbeddingStrategy {
    pub fn new(model: Arc<EmbeddingModel>) -> Self {
        Self { model }
    }
}

impl SimilarityStrategy for EmbeddingStrategy {
    fn name(&self) -> &'static str {
        "embedding"
    }

    fn similarity(&self, job_description: &str, resume_text: &str) -> f32 {
        self.model.pair_similarity(job_description, resume_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexical_identical_texts() {
        let strategy = LexicalStrategy::new();
        let text = "Senior Python developer with Django experience";

        let similarity = strategy.similarity(text, text);
        assert!((similarity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_lexical_unrelated_texts() {
        let strategy = LexicalStrategy::new();

        let similarity = strategy.similarity(
            "Chef needed for French cuisine restaurant",
            "Experienced software engineer in distributed systems",
        );
        assert_eq!(similarity, 0.0);
    }

    #[test]
    fn test_lexical_empty_input_scores_zero() {
        let strategy = LexicalStrategy::new();

        assert_eq!(strategy.similarity("", "Python developer"), 0.0);
        assert_eq!(strategy.similarity("Python developer", ""), 0.0);
        assert_eq!(strategy.similarity("", ""), 0.0);
    }

    #[test]
    fn test_lexical_stopword_only_input_scores_zero() {
        let strategy = LexicalStrategy::new();

        // Everything is filtered away; degenerate vocabulary is a 0.0, not an error.
        assert_eq!(strategy.similarity("the of and", "to in is"), 0.0);
    }

    #[test]
    fn test_lexical_inflection_still_matches() {
        let strategy = LexicalStrategy::new();

        let similarity = strategy.similarity(
            "developing distributed systems",
            "developed distributed system",
        );
        assert!((similarity - 1.0).abs() < 1e-6);
    }
}

//! Similarity scoring between job descriptions and resume text

pub mod embedding;
pub mod scorer;
pub mod strategy;
pub mod text;
pub mod tfidf;

pub use scorer::{MatchScorer, ScoreOutcome};
pub use strategy::{EmbeddingStrategy, LexicalStrategy, SimilarityStrategy};

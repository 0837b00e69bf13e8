//! Sentence embeddings using Model2Vec

use crate::error::Result;
use log::info;
use model2vec_rs::model::StaticModel;
use regex::Regex;
use std::path::Path;
use std::time::Instant;

/// An immutable, explicitly loaded sentence-embedding model.
///
/// Loaded once at startup and shared read-only for the life of the process;
/// load failure is an ordinary error the caller turns into a lexical fallback.
#[derive(Debug)]
pub struct EmbeddingModel {
    model: StaticModel,
    name: String,
    whitespace_regex: Regex,
}

impl EmbeddingModel {
    /// Load a model from a directory under `models_dir`, a local path, or a
    /// Hugging Face repo id.
    pub fn load(source: &str, models_dir: &Path) -> Result<Self> {
        let start_time = Instant::now();

        // Prefer a previously downloaded copy under the models directory.
        let local_path = models_dir.join(source);
        let resolved = if local_path.exists() {
            local_path.as_path()
        } else {
            Path::new(source)
        };

        info!("Loading embedding model: {}", resolved.display());

        let model = StaticModel::from_pretrained(resolved, None, None, None)?;

        info!("Embedding model loaded in {:.2?}", start_time.elapsed());

        Ok(Self {
            model,
            name: source.to_string(),
            whitespace_regex: Regex::new(r"\s+").expect("Invalid whitespace regex"),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cosine similarity between the embeddings of two texts.
    ///
    /// Degenerate input (empty after whitespace cleanup, zero-norm encoding)
    /// scores 0.0 rather than erroring.
    pub fn pair_similarity(&self, text_a: &str, text_b: &str) -> f32 {
        let a = self.clean(text_a);
        let b = self.clean(text_b);
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        let embedding_a = self.model.encode_single(&a);
        let embedding_b = self.model.encode_single(&b);
        cosine_similarity(&embedding_a, &embedding_b)
    }

    fn clean(&self, text: &str) -> String {
        self.whitespace_regex
            .replace_all(text.trim(), " ")
            .to_string()
    }
}

/// Cosine similarity between two embedding vectors.
///
/// Mismatched dimensions or a zero-norm vector score 0.0 instead of erroring.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot_product / (norm_a * norm_b)
    }
}

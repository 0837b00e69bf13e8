//! Match scoring between a job description and a resume document

use crate::config::Config;
use crate::extract::DocumentReader;
use crate::scoring::embedding::EmbeddingModel;
use crate::scoring::strategy::{EmbeddingStrategy, LexicalStrategy, SimilarityStrategy};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;

/// Outcome of a scoring request.
///
/// `Unavailable` means scoring could not be performed at all (empty job
/// description, missing or unreadable resume, no extractable text). It is
/// distinct from a legitimate 0.0 score and persists as null.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScoreOutcome {
    Unavailable,
    Score(f32),
}

impl ScoreOutcome {
    /// The persisted representation: scores as `Some`, unavailable as `None`.
    pub fn stored(self) -> Option<f32> {
        match self {
            ScoreOutcome::Unavailable => None,
            ScoreOutcome::Score(value) => Some(value),
        }
    }

    pub fn is_unavailable(&self) -> bool {
        matches!(self, ScoreOutcome::Unavailable)
    }
}

/// Scores resume documents against job descriptions.
///
/// The similarity strategy is chosen once at construction and held for the
/// life of the scorer; every call is otherwise stateless. Nothing in
/// [`MatchScorer::score`] returns an error: extraction and scoring failures
/// degrade to `Unavailable` or 0.0.
pub struct MatchScorer {
    strategy: Arc<dyn SimilarityStrategy>,
    reader: DocumentReader,
}

impl MatchScorer {
    /// Build a scorer with the preferred strategy for this configuration:
    /// the embedding model when it loads, the lexical fallback otherwise.
    pub fn from_config(config: &Config) -> Self {
        if !config.model.prefer_embeddings {
            info!("Embedding scoring disabled, using lexical TF-IDF strategy");
            return Self::lexical(config);
        }

        match EmbeddingModel::load(&config.model.embedding_model, config.models_dir()) {
            Ok(model) => {
                info!("Using embedding similarity strategy ({})", model.name());
                Self::with_strategy(Arc::new(EmbeddingStrategy::new(Arc::new(model))))
            }
            Err(e) => {
                warn!("Embedding model unavailable, falling back to lexical TF-IDF: {}", e);
                Self::lexical(config)
            }
        }
    }

    /// Scorer using only the lexical TF-IDF strategy.
    pub fn lexical(config: &Config) -> Self {
        Self::with_strategy(Arc::new(LexicalStrategy::with_min_token_length(
            config.scoring.min_token_length,
        )))
    }

    pub fn with_strategy(strategy: Arc<dyn SimilarityStrategy>) -> Self {
        Self {
            strategy,
            reader: DocumentReader::new(),
        }
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Score a job description against a resume document.
    ///
    /// Returns `Unavailable` when the job description is empty, the path is
    /// empty, unsupported, or unreadable, or the document yields no text.
    /// Otherwise the strategy's raw cosine similarity is converted to a
    /// percentage clamped to [0, 100].
    pub fn score(&self, job_description: &str, resume_path: &Path) -> ScoreOutcome {
        if job_description.trim().is_empty() {
            debug!("Empty job description, score unavailable");
            return ScoreOutcome::Unavailable;
        }
        if resume_path.as_os_str().is_empty() {
            debug!("Empty resume path, score unavailable");
            return ScoreOutcome::Unavailable;
        }

        let resume_text = match self.reader.read(resume_path) {
            Ok(text) => text,
            Err(e) => {
                warn!("Resume text extraction failed, score unavailable: {}", e);
                return ScoreOutcome::Unavailable;
            }
        };

        self.score_text(job_description, &resume_text)
    }

    /// Score a job description against already extracted resume text.
    pub fn score_text(&self, job_description: &str, resume_text: &str) -> ScoreOutcome {
        if job_description.trim().is_empty() {
            return ScoreOutcome::Unavailable;
        }
        if resume_text.trim().is_empty() {
            debug!("No resume text to score, score unavailable");
            return ScoreOutcome::Unavailable;
        }

        let raw = self.strategy.similarity(job_description, resume_text);
        ScoreOutcome::Score((raw * 100.0).clamp(0.0, 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedStrategy(f32);

    impl SimilarityStrategy for FixedStrategy {
        fn name(&self) -> &'static str {
            "fixed"
        }

        fn similarity(&self, _job_description: &str, _resume_text: &str) -> f32 {
            self.0
        }
    }

    fn lexical_scorer() -> MatchScorer {
        MatchScorer::with_strategy(Arc::new(LexicalStrategy::new()))
    }

    #[test]
    fn test_stored_representation() {
        assert_eq!(ScoreOutcome::Unavailable.stored(), None);
        assert_eq!(ScoreOutcome::Score(0.0).stored(), Some(0.0));
        assert_eq!(ScoreOutcome::Score(87.5).stored(), Some(87.5));
    }

    #[test]
    fn test_empty_job_description_is_unavailable() {
        let scorer = lexical_scorer();

        assert!(scorer.score("", Path::new("resume.pdf")).is_unavailable());
        assert!(scorer.score("   \n", Path::new("resume.pdf")).is_unavailable());
        assert!(scorer.score_text("", "Python developer").is_unavailable());
    }

    #[test]
    fn test_empty_resume_path_is_unavailable() {
        let scorer = lexical_scorer();

        assert!(scorer.score("Python developer", Path::new("")).is_unavailable());
    }

    #[test]
    fn test_missing_resume_file_is_unavailable() {
        let scorer = lexical_scorer();

        let outcome = scorer.score("Python developer", Path::new("/nonexistent/resume.pdf"));
        assert!(outcome.is_unavailable());
    }

    #[test]
    fn test_empty_resume_text_is_unavailable() {
        let scorer = lexical_scorer();

        assert!(scorer.score_text("Python developer", "").is_unavailable());
        assert!(scorer.score_text("Python developer", " \t ").is_unavailable());
    }

    #[test]
    fn test_identical_texts_score_one_hundred() {
        let scorer = lexical_scorer();
        let text = "Senior Python developer with Django experience";

        match scorer.score_text(text, text) {
            ScoreOutcome::Score(value) => assert!((value - 100.0).abs() < 1e-3),
            ScoreOutcome::Unavailable => panic!("expected a score"),
        }
    }

    #[test]
    fn test_unrelated_texts_score_low() {
        let scorer = lexical_scorer();

        match scorer.score_text(
            "Chef needed for French cuisine restaurant",
            "Experienced software engineer in distributed systems",
        ) {
            ScoreOutcome::Score(value) => assert!(value <= 10.0),
            ScoreOutcome::Unavailable => panic!("expected a score"),
        }
    }

    #[test]
    fn test_degenerate_vocabulary_scores_zero_not_unavailable() {
        let scorer = lexical_scorer();

        // All tokens are filtered away: a real 0.0, not an unavailable score.
        assert_eq!(
            scorer.score_text("the of and", "to in is"),
            ScoreOutcome::Score(0.0)
        );
    }

    #[test]
    fn test_percentage_is_clamped() {
        let high = MatchScorer::with_strategy(Arc::new(FixedStrategy(1.2)));
        let low = MatchScorer::with_strategy(Arc::new(FixedStrategy(-0.3)));

        assert_eq!(high.score_text("a b c", "d e f"), ScoreOutcome::Score(100.0));
        assert_eq!(low.score_text("a b c", "d e f"), ScoreOutcome::Score(0.0));
    }

    #[test]
    fn test_from_config_with_embeddings_disabled_uses_lexical() {
        let mut config = Config::default();
        config.model.prefer_embeddings = false;

        let scorer = MatchScorer::from_config(&config);
        assert_eq!(scorer.strategy_name(), "lexical");
    }

    #[test]
    fn test_from_config_falls_back_when_model_unloadable() {
        // A model directory that exists but holds no model files
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("broken-model")).unwrap();

        let mut config = Config::default();
        config.model.models_dir = dir.path().to_path_buf();
        config.model.embedding_model = "broken-model".to_string();

        let scorer = MatchScorer::from_config(&config);
        assert_eq!(scorer.strategy_name(), "lexical");

        // The fallback still produces scores in the contract's type
        match scorer.score_text("Python developer", "Python developer") {
            ScoreOutcome::Score(value) => assert!(value > 99.0),
            ScoreOutcome::Unavailable => panic!("expected a score"),
        }
    }
}

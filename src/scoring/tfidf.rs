//! TF-IDF vectorization over the two-document corpus

use std::collections::{BTreeSet, HashMap};

/// L2-normalized TF-IDF vectors for a job-description/resume token pair.
///
/// The corpus is exactly the two documents, so document frequency is 1 or 2
/// and the smoothed inverse document frequency ln((1 + n) / (1 + df)) + 1
/// takes one of two values.
#[derive(Debug, Clone)]
pub struct TfidfVectors {
    job: Vec<f32>,
    resume: Vec<f32>,
}

impl TfidfVectors {
    /// Build the vector pair; `None` when no term survives in either document.
    pub fn build(job_tokens: &[String], resume_tokens: &[String]) -> Option<Self> {
        let vocabulary: BTreeSet<&str> = job_tokens
            .iter()
            .chain(resume_tokens.iter())
            .map(|token| token.as_str())
            .collect();
        if vocabulary.is_empty() {
            return None;
        }

        let job_counts = term_counts(job_tokens);
        let resume_counts = term_counts(resume_tokens);
        let corpus_size = 2.0f32;

        let mut job = Vec::with_capacity(vocabulary.len());
        let mut resume = Vec::with_capacity(vocabulary.len());
        for term in vocabulary {
            let tf_job = job_counts.get(term).copied().unwrap_or(0) as f32;
            let tf_resume = resume_counts.get(term).copied().unwrap_or(0) as f32;
            let df = (tf_job > 0.0) as u8 + (tf_resume > 0.0) as u8;
            let idf = ((1.0 + corpus_size) / (1.0 + df as f32)).ln() + 1.0;
            job.push(tf_job * idf);
            resume.push(tf_resume * idf);
        }

        l2_normalize(&mut job);
        l2_normalize(&mut resume);
        Some(Self { job, resume })
    }

    /// Cosine similarity between the two documents.
    ///
    /// Both vectors are unit length (or all zero), so this is a dot product.
    pub fn cosine(&self) -> f32 {
        self.job
            .iter()
            .zip(self.resume.iter())
            .map(|(a, b)| a * b)
            .sum()
    }
}

fn term_counts(tokens: &[String]) -> HashMap<&str, u32> {
    let mut counts = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

fn l2_normalize(vector: &mut [f32]) {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_identical_documents_score_one() {
        let doc = tokens(&["senior", "python", "developer"]);
        let vectors = TfidfVectors::build(&doc, &doc).unwrap();

        assert!((vectors.cosine() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_disjoint_documents_score_zero() {
        let job = tokens(&["chef", "french", "cuisine"]);
        let resume = tokens(&["software", "engineer", "distributed"]);
        let vectors = TfidfVectors::build(&job, &resume).unwrap();

        assert_eq!(vectors.cosine(), 0.0);
    }

    #[test]
    fn test_partial_overlap_scores_in_between() {
        let job = tokens(&["python", "django", "developer"]);
        let resume = tokens(&["python", "flask", "developer"]);
        let vectors = TfidfVectors::build(&job, &resume).unwrap();

        let score = vectors.cosine();
        assert!(score > 0.0);
        assert!(score < 1.0);
    }

    #[test]
    fn test_empty_corpus_yields_none() {
        assert!(TfidfVectors::build(&[], &[]).is_none());
    }

    #[test]
    fn test_one_empty_document_scores_zero() {
        let job = tokens(&["python", "developer"]);
        let vectors = TfidfVectors::build(&job, &[]).unwrap();

        assert_eq!(vectors.cosine(), 0.0);
    }

    #[test]
    fn test_term_repetition_raises_weight() {
        let job = tokens(&["python", "api"]);
        let resume_light = tokens(&["python", "warehouse", "forklift"]);
        let resume_heavy = tokens(&["python", "python", "python", "warehouse", "forklift"]);

        let light = TfidfVectors::build(&job, &resume_light).unwrap().cosine();
        let heavy = TfidfVectors::build(&job, &resume_heavy).unwrap().cosine();

        assert!(heavy > light);
    }
}

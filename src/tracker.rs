//! Job-application domain types and the rescore policy
//!
//! Storage itself is external; this module owns the record shape the score is
//! stored on and the rule deciding when a save must recompute it.

use crate::scoring::{MatchScorer, ScoreOutcome};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Applied,
    Assessment,
    InterviewR1,
    InterviewR2,
    InterviewR3Plus,
    OfferReceived,
    OfferAccepted,
    OfferDeclined,
    Rejected,
    Withdrawn,
    Ghosted,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Applied => "Applied",
            ApplicationStatus::Assessment => "Assessment",
            ApplicationStatus::InterviewR1 => "Interview Round 1",
            ApplicationStatus::InterviewR2 => "Interview Round 2",
            ApplicationStatus::InterviewR3Plus => "Interview Round 3+",
            ApplicationStatus::OfferReceived => "Offer Received",
            ApplicationStatus::OfferAccepted => "Offer Accepted",
            ApplicationStatus::OfferDeclined => "Offer Declined",
            ApplicationStatus::Rejected => "Rejected",
            ApplicationStatus::Withdrawn => "Withdrawn",
            ApplicationStatus::Ghosted => "Ghosted",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationSource {
    Linkedin,
    Indeed,
    CompanyWebsite,
    JobBoardOther,
    Referral,
    Networking,
    CareerFair,
    Other,
}

impl ApplicationSource {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationSource::Linkedin => "LinkedIn",
            ApplicationSource::Indeed => "Indeed",
            ApplicationSource::CompanyWebsite => "Company Website",
            ApplicationSource::JobBoardOther => "Job Board (Other)",
            ApplicationSource::Referral => "Referral",
            ApplicationSource::Networking => "Networking",
            ApplicationSource::CareerFair => "Career Fair",
            ApplicationSource::Other => "Other",
        }
    }
}

impl fmt::Display for ApplicationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A tracked job application, as scored and persisted by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobApplication {
    pub company_name: String,
    pub job_title: String,
    pub job_description: String,
    pub application_link: Option<String>,
    pub source: ApplicationSource,
    pub applied_date: NaiveDate,
    pub status: ApplicationStatus,
    pub resume_path: Option<PathBuf>,
    pub notes: String,
    pub resume_match_score: Option<f32>,
}

impl JobApplication {
    pub fn new(company_name: &str, job_title: &str, applied_date: NaiveDate) -> Self {
        Self {
            company_name: company_name.to_string(),
            job_title: job_title.to_string(),
            job_description: String::new(),
            application_link: None,
            source: ApplicationSource::Other,
            applied_date,
            status: ApplicationStatus::Applied,
            resume_path: None,
            notes: String::new(),
            resume_match_score: None,
        }
    }

    /// Whether saving this revision must recompute the match score.
    ///
    /// True only when a resume is attached and either the record is new with a
    /// job description, the job description text changed, or the resume file
    /// changed or is newly present.
    pub fn needs_rescore(&self, previous: Option<&JobApplication>) -> bool {
        if self.resume_path.is_none() {
            return false;
        }

        match previous {
            Some(old) => {
                old.job_description != self.job_description
                    || self.resume_path != old.resume_path
            }
            None => !self.job_description.is_empty(),
        }
    }

    /// Store a scoring outcome on the record: scores as Some, unavailable as None.
    pub fn apply_score(&mut self, outcome: ScoreOutcome) {
        self.resume_match_score = outcome.stored();
    }
}

/// Record-save hook: recompute the match score when the revision calls for it.
///
/// Returns whether a recomputation happened. The score itself lands on the
/// record via [`JobApplication::apply_score`]; persisting the record stays
/// with the caller.
pub fn rescore(
    application: &mut JobApplication,
    previous: Option<&JobApplication>,
    scorer: &MatchScorer,
) -> bool {
    if !application.needs_rescore(previous) {
        return false;
    }

    let outcome = application
        .resume_path
        .as_deref()
        .map(|path| scorer.score(&application.job_description, path))
        .unwrap_or(ScoreOutcome::Unavailable);
    application.apply_score(outcome);
    true
}

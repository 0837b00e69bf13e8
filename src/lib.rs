//! Resume match scoring library

pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod scoring;
pub mod tracker;

pub use config::Config;
pub use error::{MatchError, Result};
pub use scoring::{MatchScorer, ScoreOutcome};

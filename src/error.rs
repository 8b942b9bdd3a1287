//! # Pipeline Errors
//!
//! Typed errors shared by the pipeline stages.

use crate::api::RedditError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a pipeline stage
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A stage's required input file does not exist. Carries the expected
    /// path and the name of the upstream stage that produces it, so the
    /// runner can tell the user what to rerun.
    #[error("input file {path:?} not found; run the `{upstream}` stage first")]
    MissingInput { path: PathBuf, upstream: &'static str },

    #[error("missing Reddit API credentials: {0}")]
    Credentials(String),

    #[error("Reddit API request failed: {0}")]
    Api(#[from] RedditError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("chart rendering failed: {0}")]
    Chart(String),
}

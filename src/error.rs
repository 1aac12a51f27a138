//! @ai:module:intent Define error types for grading runs
//! @ai:module:layer domain
//! @ai:module:public_api GraderError, Result
//! @ai:module:stateless true

use std::path::PathBuf;
use thiserror::Error;

/// @ai:intent Unified error type for all grader operations
#[derive(Error, Debug)]
pub enum GraderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found or unreadable: {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON format in {origin}: {source}")]
    InvalidJson {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Submissions file holds {count} entries, limit is {limit}")]
    TooManySubmissions { count: usize, limit: usize },

    #[error("No results to analyze: every submission was skipped")]
    NoResults,

    #[error("No grading results available (missing {0})")]
    NoRunAvailable(PathBuf),

    #[error("Requested file not found: {0}")]
    ExportMissing(PathBuf),

    #[error("Student {0} not found")]
    StudentNotFound(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GraderError>;

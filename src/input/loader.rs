//! @ai:module:intent JSON loader for answer keys, submissions and question text
//! @ai:module:layer infrastructure
//! @ai:module:public_api InputLoader
//! @ai:module:stateless true

use crate::error::{GraderError, Result};
use crate::input::types::{AnswerKey, QuestionText, Submission};
use serde::de::DeserializeOwned;
use std::path::Path;

/// @ai:intent Trait for loading grading inputs
pub trait InputLoaderTrait: Send + Sync {
    /// @ai:intent Load the answer key from a JSON object file
    fn load_answer_key(&self, path: &Path) -> Result<AnswerKey>;

    /// @ai:intent Load the list of submissions from a JSON array file
    fn load_submissions(&self, path: &Path) -> Result<Vec<Submission>>;

    /// @ai:intent Load optional question display text from a JSON object file
    fn load_question_text(&self, path: &Path) -> Result<QuestionText>;
}

/// @ai:intent Loads grading inputs from JSON documents
pub struct InputLoader {
    max_submissions: Option<usize>,
}

impl InputLoader {
    /// @ai:intent Create a loader without a submission limit
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            max_submissions: None,
        }
    }

    /// @ai:intent Create a loader that rejects submission files above a size bound
    /// @ai:effects pure
    pub fn with_limit(max_submissions: Option<usize>) -> Self {
        Self { max_submissions }
    }

    /// @ai:intent Parse an answer key from JSON text
    /// @ai:effects pure
    pub fn parse_answer_key(&self, content: &str, origin: &str) -> Result<AnswerKey> {
        parse_json(content, origin)
    }

    /// @ai:intent Parse submissions from JSON text, enforcing the size bound
    /// @ai:effects pure
    pub fn parse_submissions(&self, content: &str, origin: &str) -> Result<Vec<Submission>> {
        let submissions: Vec<Submission> = parse_json(content, origin)?;

        if let Some(limit) = self.max_submissions {
            if submissions.len() > limit {
                return Err(GraderError::TooManySubmissions {
                    count: submissions.len(),
                    limit,
                });
            }
        }

        Ok(submissions)
    }

    /// @ai:intent Parse question text from JSON text
    /// @ai:effects pure
    pub fn parse_question_text(&self, content: &str, origin: &str) -> Result<QuestionText> {
        parse_json(content, origin)
    }
}

impl Default for InputLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// @ai:intent Read a whole file, mapping failures to FileRead
/// @ai:effects fs:read
fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| GraderError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// @ai:intent Deserialize a JSON document, tagging errors with their origin
/// @ai:effects pure
fn parse_json<T: DeserializeOwned>(content: &str, origin: &str) -> Result<T> {
    serde_json::from_str(content).map_err(|source| GraderError::InvalidJson {
        origin: origin.to_string(),
        source,
    })
}

impl InputLoaderTrait for InputLoader {
    /// @ai:effects fs:read
    fn load_answer_key(&self, path: &Path) -> Result<AnswerKey> {
        let content = read_file(path)?;
        let key = self.parse_answer_key(&content, &path.display().to_string())?;

        tracing::info!("Loaded answer key with {} questions from {}", key.len(), path.display());
        Ok(key)
    }

    /// @ai:effects fs:read
    fn load_submissions(&self, path: &Path) -> Result<Vec<Submission>> {
        let content = read_file(path)?;
        let submissions = self.parse_submissions(&content, &path.display().to_string())?;

        tracing::info!("Loaded {} submissions from {}", submissions.len(), path.display());
        Ok(submissions)
    }

    /// @ai:effects fs:read
    fn load_question_text(&self, path: &Path) -> Result<QuestionText> {
        let content = read_file(path)?;
        self.parse_question_text(&content, &path.display().to_string())
    }
}

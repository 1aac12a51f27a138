//! @ai:module:intent Statistic types for a graded batch
//! @ai:module:layer domain
//! @ai:module:public_api StatisticsReport, QuestionStats
//! @ai:module:stateless true

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// @ai:intent Per-question performance over the submissions that attempted it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuestionStats {
    pub attempts: usize,
    pub correct: usize,
    pub correct_percentage: f64,
}

/// @ai:intent Corpus-level statistics for one grading run
/// @ai:invariant question_analysis has one entry per answer key question, in key order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsReport {
    pub total_submissions: usize,
    pub average_score: f64,
    pub highest_score: f64,
    pub lowest_score: f64,
    pub median_score: f64,
    pub question_analysis: IndexMap<String, QuestionStats>,
}

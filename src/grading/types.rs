//! @ai:module:intent Result types produced by grading
//! @ai:module:layer domain
//! @ai:module:public_api QuestionDetail, GradingResult, BatchOutcome
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};

/// @ai:intent Outcome of one question for one submission
/// @ai:invariant is_correct implies student_answer is Some
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDetail {
    pub question_id: String,
    pub correct_answer: String,
    /// None when the question was not attempted
    pub student_answer: Option<String>,
    pub is_correct: bool,
}

impl QuestionDetail {
    /// @ai:effects pure
    pub fn is_attempted(&self) -> bool {
        self.student_answer.is_some()
    }
}

/// @ai:intent Graded submission with per-question breakdown
/// @ai:invariant correct_answers <= questions_attempted <= questions_total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingResult {
    pub student_id: String,
    pub timestamp: String,
    pub questions_total: usize,
    pub questions_attempted: usize,
    pub correct_answers: usize,
    pub score_percentage: f64,
    pub question_details: Vec<QuestionDetail>,
}

impl GradingResult {
    /// @ai:intent Find the detail for a question id
    /// @ai:effects pure
    pub fn detail(&self, question_id: &str) -> Option<&QuestionDetail> {
        self.question_details
            .iter()
            .find(|d| d.question_id == question_id)
    }
}

/// @ai:intent Results of a batch run plus the number of submissions filtered out
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchOutcome {
    pub results: Vec<GradingResult>,
    pub skipped: usize,
}

//! @ai:module:intent Score single submissions and batches against an answer key
//! @ai:module:layer application
//! @ai:module:public_api Grader, GraderTrait
//! @ai:module:stateless true

use crate::grading::types::{BatchOutcome, GradingResult, QuestionDetail};
use crate::input::{AnswerKey, Submission};
use indexmap::IndexMap;

/// Format of `GradingResult::timestamp`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// @ai:intent Trait for grading submissions
pub trait GraderTrait: Send + Sync {
    /// @ai:intent Grade one student's answers
    fn grade(&self, student_id: &str, answers: &IndexMap<String, String>) -> GradingResult;

    /// @ai:intent Grade a list of submissions, skipping incomplete ones
    fn grade_batch(&self, submissions: &[Submission]) -> BatchOutcome;
}

/// @ai:intent Grades submissions by exact string match against the answer key
pub struct Grader {
    answer_key: AnswerKey,
}

impl Grader {
    /// @ai:intent Create a grader for an answer key
    /// @ai:effects pure
    pub fn new(answer_key: AnswerKey) -> Self {
        Self { answer_key }
    }

    /// @ai:effects pure
    pub fn answer_key(&self) -> &AnswerKey {
        &self.answer_key
    }

    /// @ai:intent Grade with an explicit timestamp
    /// @ai:post question_details follow answer key order
    /// @ai:effects pure
    pub fn grade_at(
        &self,
        student_id: &str,
        answers: &IndexMap<String, String>,
        timestamp: String,
    ) -> GradingResult {
        let mut questions_attempted = 0;
        let mut correct_answers = 0;
        let mut question_details = Vec::with_capacity(self.answer_key.len());

        for (question_id, correct_answer) in self.answer_key.iter() {
            let student_answer = answers.get(question_id).cloned();
            let is_correct = student_answer.as_deref() == Some(correct_answer);

            if student_answer.is_some() {
                questions_attempted += 1;
            }

            if is_correct {
                correct_answers += 1;
            }

            question_details.push(QuestionDetail {
                question_id: question_id.to_string(),
                correct_answer: correct_answer.to_string(),
                student_answer,
                is_correct,
            });
        }

        let questions_total = self.answer_key.len();

        GradingResult {
            student_id: student_id.to_string(),
            timestamp,
            questions_total,
            questions_attempted,
            correct_answers,
            score_percentage: percentage(correct_answers, questions_total),
            question_details,
        }
    }
}

/// @ai:intent Share of part in whole as a percentage, 0 for an empty whole
/// @ai:effects pure
pub fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        (part as f64 / whole as f64) * 100.0
    }
}

impl GraderTrait for Grader {
    /// @ai:effects pure
    fn grade(&self, student_id: &str, answers: &IndexMap<String, String>) -> GradingResult {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
        self.grade_at(student_id, answers, timestamp)
    }

    /// @ai:intent Grade every complete submission in input order
    /// @ai:post results.len() + skipped == submissions.len()
    /// @ai:effects pure
    fn grade_batch(&self, submissions: &[Submission]) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();

        for (index, submission) in submissions.iter().enumerate() {
            match submission.student_id.as_deref() {
                Some(student_id) if submission.is_complete() => {
                    outcome.results.push(self.grade(student_id, &submission.answers));
                }
                _ => {
                    tracing::debug!(
                        "Skipping incomplete submission #{} (student_id={:?}, answers={})",
                        index,
                        submission.student_id,
                        submission.answers.len()
                    );
                    outcome.skipped += 1;
                }
            }
        }

        if outcome.skipped > 0 {
            tracing::warn!(
                "Skipped {} of {} submissions missing a student id or answers",
                outcome.skipped,
                submissions.len()
            );
        }

        outcome
    }
}

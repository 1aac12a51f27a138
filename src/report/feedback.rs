//! @ai:module:intent Human-readable feedback for one graded submission
//! @ai:module:layer presentation
//! @ai:module:public_api FeedbackFormatter
//! @ai:module:stateless true

use crate::grading::GradingResult;
use crate::input::{default_label, QuestionText};

/// @ai:intent Renders a grading result as multi-line feedback text
pub struct FeedbackFormatter;

impl FeedbackFormatter {
    /// @ai:intent Create a new feedback formatter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Format feedback, labelling questions from question_text when given
    /// @ai:effects pure
    pub fn format(&self, result: &GradingResult, question_text: Option<&QuestionText>) -> String {
        let mut lines = vec![
            format!("Feedback for: {}", result.student_id),
            format!("Date: {}", result.timestamp),
            format!(
                "Overall Score: {:.1}% ({}/{})",
                result.score_percentage, result.correct_answers, result.questions_total
            ),
            String::new(),
            "Question Details:".to_string(),
        ];

        for detail in &result.question_details {
            let label = match question_text {
                Some(text) => text.label(&detail.question_id),
                None => default_label(&detail.question_id),
            };

            lines.push(String::new());

            match &detail.student_answer {
                None => {
                    lines.push(format!("{}: Not attempted", label));
                    lines.push(format!("  Correct answer: {}", detail.correct_answer));
                }
                Some(answer) if detail.is_correct => {
                    lines.push(format!("{}: ✓ Correct", label));
                    lines.push(format!("  Your answer: {}", answer));
                }
                Some(answer) => {
                    lines.push(format!("{}: ✗ Incorrect", label));
                    lines.push(format!("  Your answer: {}", answer));
                    lines.push(format!("  Correct answer: {}", detail.correct_answer));
                }
            }
        }

        lines.join("\n")
    }
}

impl Default for FeedbackFormatter {
    fn default() -> Self {
        Self::new()
    }
}

//! @ai:module:intent Tabular export of grading results
//! @ai:module:layer infrastructure
//! @ai:module:public_api CsvReporter, RESULT_COLUMNS
//! @ai:module:stateless true

use crate::error::Result;
use crate::grading::GradingResult;
use crate::input::AnswerKey;
use std::io::Write;
use std::path::Path;

/// Fixed leading columns of the results table
pub const RESULT_COLUMNS: [&str; 5] = [
    "Student ID",
    "Timestamp",
    "Questions Attempted",
    "Correct Answers",
    "Score (%)",
];

/// Written in the answer column for unattempted or blank answers
pub const UNANSWERED: &str = "Unanswered";

/// @ai:intent Trait for CSV report generation
pub trait CsvReporterTrait: Send + Sync {
    /// @ai:intent Write one row per result, question columns in answer key order
    fn generate(&self, results: &[GradingResult], answer_key: &AnswerKey, output_path: &Path)
        -> Result<()>;
}

/// @ai:intent Generates CSV tables from grading results
pub struct CsvReporter;

impl CsvReporter {
    /// @ai:intent Create a new CSV reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Column headers: fixed columns then answer/correct pairs per question
    /// @ai:effects pure
    pub fn headers(answer_key: &AnswerKey) -> Vec<String> {
        let mut headers: Vec<String> = RESULT_COLUMNS.iter().map(|c| c.to_string()).collect();

        for question_id in answer_key.questions() {
            headers.push(format!("Q{} Answer", question_id));
            headers.push(format!("Q{} Correct", question_id));
        }

        headers
    }

    /// @ai:intent Build the row for one result
    /// @ai:effects pure
    fn row(result: &GradingResult, answer_key: &AnswerKey) -> Vec<String> {
        let mut row = vec![
            result.student_id.clone(),
            result.timestamp.clone(),
            result.questions_attempted.to_string(),
            result.correct_answers.to_string(),
            format!("{:.2}", result.score_percentage),
        ];

        for question_id in answer_key.questions() {
            let detail = result.detail(question_id);

            let answer = detail
                .and_then(|d| d.student_answer.as_deref())
                .filter(|a| !a.is_empty())
                .unwrap_or(UNANSWERED);
            let correct = detail.map(|d| d.is_correct).unwrap_or(false);

            row.push(answer.to_string());
            row.push(if correct { "Yes" } else { "No" }.to_string());
        }

        row
    }

    /// @ai:intent Write the table to any writer
    /// @ai:effects io
    pub fn write_to<W: Write>(
        &self,
        results: &[GradingResult],
        answer_key: &AnswerKey,
        writer: W,
    ) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(Self::headers(answer_key))?;

        for result in results {
            csv_writer.write_record(Self::row(result, answer_key))?;
        }

        csv_writer.flush()?;
        Ok(())
    }
}

impl Default for CsvReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl CsvReporterTrait for CsvReporter {
    /// @ai:effects fs:write
    fn generate(
        &self,
        results: &[GradingResult],
        answer_key: &AnswerKey,
        output_path: &Path,
    ) -> Result<()> {
        let file = std::fs::File::create(output_path)?;
        self.write_to(results, answer_key, file)
    }
}

//! @ai:module:intent Markdown summary of grading statistics
//! @ai:module:layer infrastructure
//! @ai:module:public_api MarkdownReporter
//! @ai:module:stateless true

use crate::error::Result;
use crate::metrics::StatisticsReport;
use std::fmt::Write as FmtWrite;
use std::path::Path;

/// @ai:intent Trait for Markdown report generation
pub trait MarkdownReporterTrait: Send + Sync {
    /// @ai:intent Generate Markdown report from statistics
    fn generate(&self, stats: &StatisticsReport, generated_at: &str, output_path: &Path)
        -> Result<()>;
}

/// @ai:intent Generates Markdown summaries from statistics
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// @ai:intent Create a new Markdown reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Render the whole document
    /// @ai:effects pure
    pub fn render(stats: &StatisticsReport, generated_at: &str) -> String {
        let mut output = Self::generate_summary(stats, generated_at);
        output.push_str(&Self::generate_score_table(stats));
        output.push_str(&Self::generate_question_section(stats));
        output
    }

    /// @ai:effects pure
    fn generate_summary(stats: &StatisticsReport, generated_at: &str) -> String {
        let mut output = String::new();

        writeln!(output, "# MCQ Grading Summary").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Date:** {}", generated_at).unwrap();
        writeln!(output, "**Submissions:** {}", stats.total_submissions).unwrap();
        writeln!(output).unwrap();

        output
    }

    /// @ai:effects pure
    fn generate_score_table(stats: &StatisticsReport) -> String {
        let mut output = String::new();

        writeln!(output, "## Overall Results").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| Metric | Score |").unwrap();
        writeln!(output, "|--------|-------|").unwrap();
        writeln!(output, "| Average | {:.1}% |", stats.average_score).unwrap();
        writeln!(output, "| Median | {:.1}% |", stats.median_score).unwrap();
        writeln!(output, "| Highest | {:.1}% |", stats.highest_score).unwrap();
        writeln!(output, "| Lowest | {:.1}% |", stats.lowest_score).unwrap();
        writeln!(output).unwrap();

        output
    }

    /// @ai:intent Per-question table; questions nobody attempted are flagged
    /// @ai:effects pure
    fn generate_question_section(stats: &StatisticsReport) -> String {
        let mut output = String::new();

        writeln!(output, "## Question Analysis").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "| Question | Attempts | Correct | Correct Rate |").unwrap();
        writeln!(output, "|----------|----------|---------|--------------|").unwrap();

        for (question_id, q) in &stats.question_analysis {
            let rate = if q.attempts == 0 {
                "n/a".to_string()
            } else {
                format!("{:.1}%", q.correct_percentage)
            };

            writeln!(
                output,
                "| {} | {} | {} | {} |",
                question_id, q.attempts, q.correct, rate
            )
            .unwrap();
        }

        writeln!(output).unwrap();
        output
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownReporterTrait for MarkdownReporter {
    /// @ai:effects fs:write
    fn generate(
        &self,
        stats: &StatisticsReport,
        generated_at: &str,
        output_path: &Path,
    ) -> Result<()> {
        std::fs::write(output_path, Self::render(stats, generated_at))?;
        Ok(())
    }
}

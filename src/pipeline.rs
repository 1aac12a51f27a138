//! @ai:module:intent End-to-end grading run: load, grade, aggregate, export
//! @ai:module:layer application
//! @ai:module:public_api GradingPipeline, RunInputs, RunOutput

use crate::config::GraderConfig;
use crate::error::{GraderError, Result};
use crate::grading::{BatchOutcome, Grader, GraderTrait, GradingResult};
use crate::input::{AnswerKey, InputLoader, InputLoaderTrait, QuestionText, Submission};
use crate::metrics::{StatisticsAggregator, StatisticsAggregatorTrait, StatisticsReport};
use crate::report::{ExportOptions, ExportPaths, ReportGenerator, RunSummary};
use std::path::PathBuf;

/// @ai:intent Input files for one run
#[derive(Debug, Clone)]
pub struct RunInputs {
    pub answer_key: PathBuf,
    pub submissions: PathBuf,
    pub question_text: Option<PathBuf>,
}

/// @ai:intent Everything a finished run produced
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub answer_key: AnswerKey,
    pub question_text: Option<QuestionText>,
    pub outcome: BatchOutcome,
    pub stats: StatisticsReport,
    pub paths: ExportPaths,
    pub summary: RunSummary,
}

impl RunOutput {
    /// @ai:intent Result for a student id, if that student was graded
    /// @ai:effects pure
    pub fn result_for(&self, student_id: &str) -> Option<&GradingResult> {
        self.outcome
            .results
            .iter()
            .find(|r| r.student_id == student_id)
    }
}

/// @ai:intent Drives a complete grading run
pub struct GradingPipeline {
    config: GraderConfig,
    loader: InputLoader,
    aggregator: StatisticsAggregator,
    reporter: ReportGenerator,
}

impl GradingPipeline {
    /// @ai:intent Create a pipeline for a configuration
    /// @ai:effects pure
    pub fn new(config: GraderConfig) -> Self {
        let loader = InputLoader::with_limit(config.grading.submission_limit());

        Self {
            config,
            loader,
            aggregator: StatisticsAggregator::new(),
            reporter: ReportGenerator::new(),
        }
    }

    /// @ai:effects pure
    pub fn config(&self) -> &GraderConfig {
        &self.config
    }

    /// @ai:intent Load all inputs before any grading starts
    /// @ai:effects fs:read
    pub fn load(
        &self,
        inputs: &RunInputs,
    ) -> Result<(AnswerKey, Vec<Submission>, Option<QuestionText>)> {
        let answer_key = self.loader.load_answer_key(&inputs.answer_key)?;
        let submissions = self.loader.load_submissions(&inputs.submissions)?;
        let question_text = inputs
            .question_text
            .as_deref()
            .map(|p| self.loader.load_question_text(p))
            .transpose()?;

        Ok((answer_key, submissions, question_text))
    }

    /// @ai:intent Load files, then grade and export
    /// @ai:effects fs:read, fs:write
    pub fn run_files(&self, inputs: &RunInputs, options: &ExportOptions) -> Result<RunOutput> {
        let (answer_key, submissions, question_text) = self.load(inputs)?;
        self.run(answer_key, &submissions, question_text, options)
    }

    /// @ai:intent Grade in-memory inputs, export reports and save the run summary
    /// @ai:post nothing is written when every submission is skipped
    /// @ai:effects fs:write
    pub fn run(
        &self,
        answer_key: AnswerKey,
        submissions: &[Submission],
        question_text: Option<QuestionText>,
        options: &ExportOptions,
    ) -> Result<RunOutput> {
        tracing::info!("Processing {} submissions...", submissions.len());

        let grader = Grader::new(answer_key);
        let outcome = grader.grade_batch(submissions);

        let stats = self
            .aggregator
            .aggregate(grader.answer_key(), &outcome.results)
            .ok_or(GraderError::NoResults)?;

        let paths =
            self.reporter
                .export_all(&outcome.results, &stats, grader.answer_key(), options)?;

        let summary_path = options.output_dir.join(&self.config.paths.summary_file);
        let summary = self
            .reporter
            .save_summary(&paths, &stats, outcome.skipped, &summary_path)?;

        Ok(RunOutput {
            answer_key: grader.answer_key().clone(),
            question_text,
            outcome,
            stats,
            paths,
            summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ExportConfig;
    use tempfile::TempDir;

    #[test]
    fn test_all_skipped_writes_nothing() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("out");
        let pipeline = GradingPipeline::new(GraderConfig::default());
        let key: AnswerKey = [("1", "B")].into_iter().collect();
        let submissions = vec![Submission::new("S1", Vec::<(String, String)>::new())];

        let err = pipeline
            .run(key, &submissions, None, &ExportOptions::new(&out, ExportConfig::default()))
            .unwrap_err();

        assert!(matches!(err, GraderError::NoResults));
        assert!(!out.exists());
    }

    #[test]
    fn test_missing_input_file_aborts_before_export() {
        let temp = TempDir::new().unwrap();
        let out = temp.path().join("out");
        let key_path = temp.path().join("key.json");
        std::fs::write(&key_path, r#"{"1": "B"}"#).unwrap();

        let inputs = RunInputs {
            answer_key: key_path,
            submissions: temp.path().join("missing.json"),
            question_text: None,
        };

        let err = GradingPipeline::new(GraderConfig::default())
            .run_files(&inputs, &ExportOptions::new(&out, ExportConfig::default()))
            .unwrap_err();

        assert!(matches!(err, GraderError::FileRead { .. }));
        assert!(!out.exists());
    }
}

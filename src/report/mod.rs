//! @ai:module:intent Report generation for grading runs
//! @ai:module:layer infrastructure
//! @ai:module:public_api ReportGenerator, ExportOptions, ExportPaths, CsvReporter, JsonReporter, MarkdownReporter, FeedbackFormatter, RunSummary

pub mod csv_report;
pub mod feedback;
pub mod json_report;
pub mod markdown_report;
pub mod summary;

pub use csv_report::{CsvReporter, CsvReporterTrait, RESULT_COLUMNS, UNANSWERED};
pub use feedback::FeedbackFormatter;
pub use json_report::{JsonReporter, JsonReporterTrait};
pub use markdown_report::{MarkdownReporter, MarkdownReporterTrait};
pub use summary::{ExportKind, RunSummary, StatsSummary, StudentRecord};

use crate::config::ExportConfig;
use crate::error::Result;
use crate::grading::{GradingResult, TIMESTAMP_FORMAT};
use crate::input::AnswerKey;
use crate::metrics::StatisticsReport;
use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// Timestamp embedded in generated file names
pub const FILE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// @ai:intent Where and under which names a run's exports are written
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub output_dir: PathBuf,
    pub results_csv: Option<String>,
    pub stats_json: Option<String>,
    pub export: ExportConfig,
}

impl ExportOptions {
    /// @ai:intent Options with generated file names
    /// @ai:effects pure
    pub fn new(output_dir: impl Into<PathBuf>, export: ExportConfig) -> Self {
        Self {
            output_dir: output_dir.into(),
            results_csv: None,
            stats_json: None,
            export,
        }
    }

    /// @ai:intent Resolve the three file paths for a run started at `now`
    /// @ai:effects pure
    pub fn resolve(&self, now: &DateTime<Local>) -> ExportPaths {
        let stamp = now.format(FILE_TIMESTAMP_FORMAT).to_string();
        let generated = |prefix: &str, ext: &str| format!("{}_{}.{}", prefix, stamp, ext);

        let csv = self
            .results_csv
            .clone()
            .unwrap_or_else(|| generated(&self.export.results_prefix, "csv"));
        let json = self
            .stats_json
            .clone()
            .unwrap_or_else(|| generated(&self.export.statistics_prefix, "json"));
        let markdown = self
            .export
            .write_markdown
            .then(|| self.output_dir.join(generated(&self.export.summary_prefix, "md")));

        ExportPaths {
            csv: self.output_dir.join(csv),
            json: self.output_dir.join(json),
            markdown,
        }
    }
}

/// @ai:intent Paths of the files written by one run
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPaths {
    pub csv: PathBuf,
    pub json: PathBuf,
    pub markdown: Option<PathBuf>,
}

/// @ai:intent Combined report generator
pub struct ReportGenerator {
    csv: CsvReporter,
    json: JsonReporter,
    markdown: MarkdownReporter,
}

impl ReportGenerator {
    /// @ai:intent Create a new report generator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self {
            csv: CsvReporter::new(),
            json: JsonReporter::new(),
            markdown: MarkdownReporter::new(),
        }
    }

    /// @ai:intent Write the results table, statistics JSON and optional Markdown summary
    /// @ai:pre stats was aggregated from results
    /// @ai:effects fs:write
    pub fn export_all(
        &self,
        results: &[GradingResult],
        stats: &StatisticsReport,
        answer_key: &AnswerKey,
        options: &ExportOptions,
    ) -> Result<ExportPaths> {
        std::fs::create_dir_all(&options.output_dir)?;

        let now = Local::now();
        let paths = options.resolve(&now);

        self.csv.generate(results, answer_key, &paths.csv)?;
        tracing::info!("Results exported to {}", paths.csv.display());

        self.json.generate(stats, &paths.json)?;
        tracing::info!("Statistics exported to {}", paths.json.display());

        if let Some(markdown_path) = &paths.markdown {
            let generated_at = now.format(TIMESTAMP_FORMAT).to_string();
            self.markdown.generate(stats, &generated_at, markdown_path)?;
            tracing::info!("Summary exported to {}", markdown_path.display());
        }

        Ok(paths)
    }

    /// @ai:intent Record the run so later lookups can find its exports
    /// @ai:effects fs:write
    pub fn save_summary(
        &self,
        paths: &ExportPaths,
        stats: &StatisticsReport,
        skipped: usize,
        summary_path: &Path,
    ) -> Result<RunSummary> {
        let summary = RunSummary::new(paths, stats, skipped);
        summary.save(summary_path)?;
        Ok(summary)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

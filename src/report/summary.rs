//! @ai:module:intent Last-run summary and lookups over the exported files
//! @ai:module:layer infrastructure
//! @ai:module:public_api RunSummary, StatsSummary, ExportKind, StudentRecord

use crate::error::{GraderError, Result};
use crate::metrics::StatisticsReport;
use crate::report::csv_report::RESULT_COLUMNS;
use crate::report::ExportPaths;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// @ai:intent Headline statistics kept in the run summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub average_score: f64,
    pub highest_score: f64,
    pub lowest_score: f64,
    pub total_submissions: usize,
}

/// @ai:intent Record of the most recent run, overwritten by each run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
    #[serde(default)]
    pub markdown_path: Option<PathBuf>,
    pub results_count: usize,
    #[serde(default)]
    pub skipped_count: usize,
    pub stats_summary: StatsSummary,
}

/// @ai:intent Selects one of the exported files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Csv,
    Json,
    Markdown,
}

impl FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportKind::Csv),
            "json" => Ok(ExportKind::Json),
            "markdown" | "md" => Ok(ExportKind::Markdown),
            other => Err(format!("unknown export kind '{}' (expected csv, json or markdown)", other)),
        }
    }
}

impl RunSummary {
    /// @ai:intent Build the summary for a finished run
    /// @ai:effects pure
    pub fn new(paths: &ExportPaths, stats: &StatisticsReport, skipped_count: usize) -> Self {
        Self {
            csv_path: paths.csv.clone(),
            json_path: paths.json.clone(),
            markdown_path: paths.markdown.clone(),
            results_count: stats.total_submissions,
            skipped_count,
            stats_summary: StatsSummary {
                average_score: stats.average_score,
                highest_score: stats.highest_score,
                lowest_score: stats.lowest_score,
                total_submissions: stats.total_submissions,
            },
        }
    }

    /// @ai:intent Write the summary, replacing any previous one
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        tracing::debug!("Run summary saved to {}", path.display());
        Ok(())
    }

    /// @ai:intent Read the last run summary
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GraderError::NoRunAvailable(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// @ai:intent Resolve an export of this run, failing if it is gone from disk
    /// @ai:effects fs:read
    pub fn export_path(&self, kind: ExportKind) -> Result<&Path> {
        let path = match kind {
            ExportKind::Csv => Some(self.csv_path.as_path()),
            ExportKind::Json => Some(self.json_path.as_path()),
            ExportKind::Markdown => self.markdown_path.as_deref(),
        };

        match path {
            Some(p) if p.exists() => Ok(p),
            Some(p) => Err(GraderError::ExportMissing(p.to_path_buf())),
            None => Err(GraderError::ExportMissing(PathBuf::from("<markdown export disabled>"))),
        }
    }
}

/// @ai:intent One student's row re-read from the results table
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    pub fields: Vec<(String, String)>,
}

impl StudentRecord {
    /// @ai:intent Find the first row whose "Student ID" equals student_id
    /// @ai:effects fs:read
    pub fn find(csv_path: &Path, student_id: &str) -> Result<Self> {
        if !csv_path.exists() {
            return Err(GraderError::ExportMissing(csv_path.to_path_buf()));
        }

        let mut reader = csv::Reader::from_path(csv_path)?;
        let headers = reader.headers()?.clone();
        let id_column = headers
            .iter()
            .position(|h| h == RESULT_COLUMNS[0])
            .unwrap_or(0);

        for record in reader.records() {
            let record = record?;

            if record.get(id_column) == Some(student_id) {
                let fields = headers
                    .iter()
                    .zip(record.iter())
                    .map(|(h, v)| (h.to_string(), v.to_string()))
                    .collect();
                return Ok(Self { fields });
            }
        }

        Err(GraderError::StudentNotFound(student_id.to_string()))
    }

    /// @ai:intent Value of a column
    /// @ai:effects pure
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(h, _)| h == column)
            .map(|(_, v)| v.as_str())
    }
}

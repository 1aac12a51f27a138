//! @ai:module:intent Configuration structs for the grader
//! @ai:module:layer infrastructure
//! @ai:module:public_api GraderConfig, PathConfig, GradingConfig, ExportConfig
//! @ai:module:stateless true

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// @ai:intent Main configuration for grading runs
/// @ai:effects pure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraderConfig {
    #[serde(default)]
    pub paths: PathConfig,
    #[serde(default)]
    pub grading: GradingConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

/// @ai:intent Output locations
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Run summary file name, relative to output_dir
    #[serde(default = "default_summary_file")]
    pub summary_file: PathBuf,
}

/// @ai:intent Limits applied while ingesting submissions
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingConfig {
    /// 0 disables the limit
    #[serde(default = "default_max_submissions")]
    pub max_submissions: usize,
}

impl GradingConfig {
    /// @ai:intent Submission limit for the loader, None when disabled
    /// @ai:effects pure
    pub fn submission_limit(&self) -> Option<usize> {
        (self.max_submissions > 0).then_some(self.max_submissions)
    }
}

/// @ai:intent Naming and selection of export files
/// @ai:effects pure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    #[serde(default = "default_results_prefix")]
    pub results_prefix: String,
    #[serde(default = "default_statistics_prefix")]
    pub statistics_prefix: String,
    #[serde(default = "default_summary_prefix")]
    pub summary_prefix: String,
    #[serde(default = "default_true")]
    pub write_markdown: bool,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            summary_file: default_summary_file(),
        }
    }
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            max_submissions: default_max_submissions(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            results_prefix: default_results_prefix(),
            statistics_prefix: default_statistics_prefix(),
            summary_prefix: default_summary_prefix(),
            write_markdown: true,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("results")
}

fn default_summary_file() -> PathBuf {
    PathBuf::from("session_data.json")
}

fn default_max_submissions() -> usize {
    10_000
}

fn default_results_prefix() -> String {
    "mcq_results".to_string()
}

fn default_statistics_prefix() -> String {
    "mcq_statistics".to_string()
}

fn default_summary_prefix() -> String {
    "mcq_summary".to_string()
}

fn default_true() -> bool {
    true
}

impl GraderConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// @ai:intent Replace the output directory when an override is given
    /// @ai:effects pure
    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = output_dir {
            self.paths.output_dir = dir;
        }
        self
    }

    /// @ai:intent Full path of the run summary file
    /// @ai:effects pure
    pub fn summary_path(&self) -> PathBuf {
        self.paths.output_dir.join(&self.paths.summary_file)
    }
}

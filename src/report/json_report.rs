//! @ai:module:intent JSON statistics export
//! @ai:module:layer infrastructure
//! @ai:module:public_api JsonReporter
//! @ai:module:stateless true

use crate::error::Result;
use crate::metrics::StatisticsReport;
use std::path::Path;

/// @ai:intent Trait for JSON report generation
pub trait JsonReporterTrait: Send + Sync {
    /// @ai:intent Generate JSON report from statistics
    fn generate(&self, stats: &StatisticsReport, output_path: &Path) -> Result<()>;
}

/// @ai:intent Generates indented JSON from statistics reports
pub struct JsonReporter;

impl JsonReporter {
    /// @ai:intent Create a new JSON reporter
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Read a statistics report back from disk
    /// @ai:effects fs:read
    pub fn load(&self, path: &Path) -> Result<StatisticsReport> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReporterTrait for JsonReporter {
    /// @ai:intent Generate JSON report to file
    /// @ai:effects fs:write
    fn generate(&self, stats: &StatisticsReport, output_path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(stats)?;
        std::fs::write(output_path, json)?;
        Ok(())
    }
}

//! @ai:module:intent MCQ grading library: scoring, statistics and reports
//! @ai:module:layer application
//! @ai:module:public_api config, error, input, grading, metrics, report, pipeline

pub mod config;
pub mod error;
pub mod grading;
pub mod input;
pub mod metrics;
pub mod pipeline;
pub mod report;

pub use config::GraderConfig;
pub use error::{GraderError, Result};
pub use grading::{BatchOutcome, Grader, GraderTrait, GradingResult, QuestionDetail};
pub use input::{AnswerKey, InputLoader, InputLoaderTrait, QuestionText, Submission};
pub use metrics::{QuestionStats, StatisticsAggregator, StatisticsAggregatorTrait, StatisticsReport};
pub use pipeline::{GradingPipeline, RunInputs, RunOutput};
pub use report::{
    ExportKind, ExportOptions, ExportPaths, FeedbackFormatter, ReportGenerator, RunSummary,
    StudentRecord,
};

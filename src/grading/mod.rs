//! @ai:module:intent Grading engine and batch processing
//! @ai:module:layer application
//! @ai:module:public_api Grader, GradingResult, QuestionDetail, BatchOutcome

pub mod engine;
pub mod types;

pub use engine::{percentage, Grader, GraderTrait, TIMESTAMP_FORMAT};
pub use types::{BatchOutcome, GradingResult, QuestionDetail};

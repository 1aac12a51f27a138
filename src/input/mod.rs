//! @ai:module:intent Grading inputs and their loading
//! @ai:module:layer domain
//! @ai:module:public_api AnswerKey, Submission, QuestionText, InputLoader

pub mod loader;
pub mod types;

pub use loader::{InputLoader, InputLoaderTrait};
pub use types::{default_label, AnswerKey, QuestionText, Submission};

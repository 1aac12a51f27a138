//! @ai:module:intent Statistics collection and aggregation
//! @ai:module:layer application
//! @ai:module:public_api StatisticsReport, QuestionStats, StatisticsAggregator

pub mod aggregator;
pub mod types;

pub use aggregator::{median, StatisticsAggregator, StatisticsAggregatorTrait};
pub use types::{QuestionStats, StatisticsReport};

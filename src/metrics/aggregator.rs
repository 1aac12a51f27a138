//! @ai:module:intent Statistical aggregation over graded results
//! @ai:module:layer application
//! @ai:module:public_api StatisticsAggregator
//! @ai:module:stateless true

use crate::grading::{percentage, GradingResult};
use crate::input::AnswerKey;
use crate::metrics::types::{QuestionStats, StatisticsReport};
use indexmap::IndexMap;

/// @ai:intent Trait for statistics aggregation
pub trait StatisticsAggregatorTrait: Send + Sync {
    /// @ai:intent Aggregate results into a report, None when there is nothing to analyze
    fn aggregate(&self, answer_key: &AnswerKey, results: &[GradingResult])
        -> Option<StatisticsReport>;
}

/// @ai:intent Computes score and per-question statistics for a batch
pub struct StatisticsAggregator;

impl StatisticsAggregator {
    /// @ai:intent Create a new statistics aggregator
    /// @ai:effects pure
    pub fn new() -> Self {
        Self
    }

    /// @ai:intent Count attempts and correct answers per answer key question
    /// @ai:effects pure
    fn analyze_questions(
        answer_key: &AnswerKey,
        results: &[GradingResult],
    ) -> IndexMap<String, QuestionStats> {
        let mut analysis: IndexMap<String, QuestionStats> = answer_key
            .questions()
            .map(|q| (q.to_string(), QuestionStats::default()))
            .collect();

        let attempted = results
            .iter()
            .flat_map(|r| r.question_details.iter())
            .filter(|d| d.is_attempted());

        for detail in attempted {
            if let Some(stats) = analysis.get_mut(&detail.question_id) {
                stats.attempts += 1;

                if detail.is_correct {
                    stats.correct += 1;
                }
            }
        }

        for stats in analysis.values_mut() {
            stats.correct_percentage = percentage(stats.correct, stats.attempts);
        }

        analysis
    }
}

impl Default for StatisticsAggregator {
    fn default() -> Self {
        Self::new()
    }
}

/// @ai:intent Calculate average of an iterator of f64
/// @ai:effects pure
fn average<I: Iterator<Item = f64>>(iter: I) -> f64 {
    let (sum, count) = iter.fold((0.0, 0u32), |(s, c), v| (s + v, c + 1));

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// @ai:intent Element at index n/2 of the ascending sort (upper middle for even n)
/// @ai:effects pure
pub fn median(scores: &[f64]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }

    let mut sorted = scores.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    Some(sorted[sorted.len() / 2])
}

impl StatisticsAggregatorTrait for StatisticsAggregator {
    /// @ai:effects pure
    fn aggregate(
        &self,
        answer_key: &AnswerKey,
        results: &[GradingResult],
    ) -> Option<StatisticsReport> {
        let scores: Vec<f64> = results.iter().map(|r| r.score_percentage).collect();
        let median_score = median(&scores)?;

        let highest_score = scores.iter().copied().reduce(f64::max)?;
        let lowest_score = scores.iter().copied().reduce(f64::min)?;

        Some(StatisticsReport {
            total_submissions: results.len(),
            average_score: average(scores.iter().copied()),
            highest_score,
            lowest_score,
            median_score,
            question_analysis: Self::analyze_questions(answer_key, results),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grading::QuestionDetail;
    use pretty_assertions::assert_eq;

    fn result(student_id: &str, score: f64, details: Vec<QuestionDetail>) -> GradingResult {
        GradingResult {
            student_id: student_id.to_string(),
            timestamp: "2026-01-19 00:00:00".to_string(),
            questions_total: details.len(),
            questions_attempted: details.iter().filter(|d| d.is_attempted()).count(),
            correct_answers: details.iter().filter(|d| d.is_correct).count(),
            score_percentage: score,
            question_details: details,
        }
    }

    fn detail(question_id: &str, correct: &str, answer: Option<&str>) -> QuestionDetail {
        QuestionDetail {
            question_id: question_id.to_string(),
            correct_answer: correct.to_string(),
            student_answer: answer.map(str::to_string),
            is_correct: answer == Some(correct),
        }
    }

    #[test]
    fn test_average() {
        let values = vec![10.0, 20.0, 30.0];
        assert!((average(values.into_iter()) - 20.0).abs() < 0.01);
    }

    #[test]
    fn test_median_takes_index_half_of_sorted_scores() {
        assert_eq!(median(&[60.0, 40.0]), Some(60.0));
        assert_eq!(median(&[90.0, 10.0, 50.0]), Some(50.0));
        assert_eq!(median(&[10.0, 20.0, 30.0, 40.0]), Some(30.0));
        assert_eq!(median(&[100.0]), Some(100.0));
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_empty_results_yield_none() {
        let key: AnswerKey = [("1", "B")].into_iter().collect();
        assert!(StatisticsAggregator::new().aggregate(&key, &[]).is_none());
    }

    #[test]
    fn test_overall_scores() {
        let key: AnswerKey = [("1", "B")].into_iter().collect();
        let results = vec![
            result("S1", 40.0, vec![]),
            result("S2", 60.0, vec![]),
            result("S3", 100.0, vec![]),
            result("S4", 0.0, vec![]),
        ];

        let stats = StatisticsAggregator::new().aggregate(&key, &results).unwrap();
        assert_eq!(stats.total_submissions, 4);
        assert!((stats.average_score - 50.0).abs() < 0.01);
        assert_eq!(stats.highest_score, 100.0);
        assert_eq!(stats.lowest_score, 0.0);
        assert_eq!(stats.median_score, 60.0);
    }

    #[test]
    fn test_question_analysis_counts_only_attempts() {
        let key: AnswerKey = [("1", "B"), ("2", "A"), ("3", "C")].into_iter().collect();
        let results = vec![
            result(
                "S1",
                0.0,
                vec![
                    detail("1", "B", Some("B")),
                    detail("2", "A", Some("C")),
                    detail("3", "C", None),
                ],
            ),
            result(
                "S2",
                0.0,
                vec![
                    detail("1", "B", Some("D")),
                    detail("2", "A", None),
                    detail("3", "C", None),
                ],
            ),
        ];

        let stats = StatisticsAggregator::new().aggregate(&key, &results).unwrap();
        let order: Vec<_> = stats.question_analysis.keys().cloned().collect();
        assert_eq!(order, vec!["1", "2", "3"]);

        assert_eq!(
            stats.question_analysis["1"],
            QuestionStats {
                attempts: 2,
                correct: 1,
                correct_percentage: 50.0
            }
        );
        assert_eq!(
            stats.question_analysis["2"],
            QuestionStats {
                attempts: 1,
                correct: 0,
                correct_percentage: 0.0
            }
        );
        assert_eq!(stats.question_analysis["3"], QuestionStats::default());
    }

    #[test]
    fn test_question_outside_key_is_ignored() {
        let key: AnswerKey = [("1", "B")].into_iter().collect();
        let results = vec![result(
            "S1",
            100.0,
            vec![detail("1", "B", Some("B")), detail("extra", "X", Some("X"))],
        )];

        let stats = StatisticsAggregator::new().aggregate(&key, &results).unwrap();
        assert_eq!(stats.question_analysis.len(), 1);
        assert_eq!(stats.question_analysis["1"].attempts, 1);
    }
}

use mcq_grader::{
    config::{ExportConfig, GraderConfig},
    report::{ExportKind, ExportOptions, JsonReporter, UNANSWERED},
    AnswerKey, FeedbackFormatter, Grader, GraderError, GraderTrait, GradingPipeline, RunInputs,
    RunSummary, StatisticsAggregator, StatisticsAggregatorTrait, StudentRecord, Submission,
};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::TempDir;

const ANSWER_KEY: &str = r#"{"1": "B", "2": "A", "3": "D", "4": "C", "5": "A"}"#;

const QUESTION_TEXT: &str = r#"{
    "1": "What is the capital of France?",
    "2": "Which planet is closest to the Sun?"
}"#;

const SUBMISSIONS: &str = r#"[
    {"student_id": "S001", "answers": {"1": "B", "2": "A", "3": "D", "4": "C", "5": "A"}},
    {"student_id": "S002", "answers": {"1": "B", "2": "B", "3": "C", "4": "C", "5": "A"}},
    {"student_id": "S003", "answers": {"1": "B", "2": "A", "3": "D", "5": "B"}},
    {"student_id": "S004", "answers": {}},
    {"answers": {"1": "B"}}
]"#;

fn write_inputs(dir: &Path) -> RunInputs {
    let answer_key = dir.join("answer_key.json");
    let submissions = dir.join("submissions.json");
    let question_text = dir.join("question_text.json");

    std::fs::write(&answer_key, ANSWER_KEY).unwrap();
    std::fs::write(&submissions, SUBMISSIONS).unwrap();
    std::fs::write(&question_text, QUESTION_TEXT).unwrap();

    RunInputs {
        answer_key,
        submissions,
        question_text: Some(question_text),
    }
}

fn key(pairs: &[(&str, &str)]) -> AnswerKey {
    pairs.iter().map(|(q, a)| (*q, *a)).collect()
}

#[test]
fn full_run_exports_reports_and_summary() {
    let temp = TempDir::new().unwrap();
    let inputs = write_inputs(temp.path());
    let out = temp.path().join("results");

    let options = ExportOptions {
        results_csv: Some("class.csv".to_string()),
        ..ExportOptions::new(&out, ExportConfig::default())
    };

    let output = GradingPipeline::new(GraderConfig::default())
        .run_files(&inputs, &options)
        .unwrap();

    assert_eq!(output.outcome.results.len(), 3);
    assert_eq!(output.outcome.skipped, 2);
    assert_eq!(output.paths.csv, out.join("class.csv"));
    assert!(output.paths.json.exists());
    assert!(output.paths.markdown.as_ref().unwrap().exists());

    let stats = &output.stats;
    assert_eq!(stats.total_submissions, 3);
    assert_eq!(stats.highest_score, 100.0);
    assert_eq!(stats.lowest_score, 60.0);
    assert_eq!(stats.median_score, 60.0);
    assert!((stats.average_score - 220.0 / 3.0).abs() < 1e-9);
    assert_eq!(stats.question_analysis["4"].attempts, 2);
    assert_eq!(stats.question_analysis["2"].correct, 2);

    let exported = JsonReporter::new().load(&output.paths.json).unwrap();
    assert_eq!(&exported, stats);

    let summary = RunSummary::load(&out.join("session_data.json")).unwrap();
    assert_eq!(summary, output.summary);
    assert_eq!(summary.results_count, 3);
    assert_eq!(summary.export_path(ExportKind::Csv).unwrap(), out.join("class.csv"));

    let record = StudentRecord::find(&summary.csv_path, "S003").unwrap();
    assert_eq!(record.get("Questions Attempted"), Some("4"));
    assert_eq!(record.get("Q4 Answer"), Some(UNANSWERED));
    assert_eq!(record.get("Q5 Correct"), Some("No"));

    assert!(matches!(
        StudentRecord::find(&summary.csv_path, "S004"),
        Err(GraderError::StudentNotFound(_))
    ));

    let feedback = FeedbackFormatter::new().format(
        output.result_for("S002").unwrap(),
        output.question_text.as_ref(),
    );
    assert!(feedback.contains("Overall Score: 60.0% (3/5)"));
    assert!(feedback.contains("Which planet is closest to the Sun?: ✗ Incorrect"));
    assert!(feedback.contains("Question 3: ✗ Incorrect"));
}

#[test]
fn malformed_submissions_file_is_rejected() {
    let temp = TempDir::new().unwrap();
    let inputs = write_inputs(temp.path());
    std::fs::write(&inputs.submissions, "[{\"student_id\": ").unwrap();
    let out = temp.path().join("results");

    let err = GradingPipeline::new(GraderConfig::default())
        .run_files(&inputs, &ExportOptions::new(&out, ExportConfig::default()))
        .unwrap_err();

    assert!(matches!(err, GraderError::InvalidJson { .. }));
    assert!(!out.exists());
}

#[test]
fn perfect_and_zero_scores() {
    let answer_key = key(&[("1", "B"), ("2", "A"), ("3", "C")]);
    let grader = Grader::new(answer_key);

    let perfect = grader.grade("S1", &Submission::new("S1", [("1", "B"), ("2", "A"), ("3", "C")]).answers);
    assert_eq!(perfect.score_percentage, 100.0);
    assert_eq!(perfect.correct_answers, perfect.questions_total);

    let zero = grader.grade("S2", &Submission::new("S2", [("1", "A"), ("2", "B")]).answers);
    assert_eq!(zero.score_percentage, 0.0);
    assert!(zero.correct_answers <= zero.questions_attempted);
    assert!(zero.questions_attempted <= zero.questions_total);
}

#[test]
fn spec_example_and_missing_answer() {
    let grader = Grader::new(key(&[("1", "B"), ("2", "A")]));

    let result = grader.grade("S1", &Submission::new("S1", [("1", "B"), ("2", "B")]).answers);
    assert_eq!(result.questions_total, 2);
    assert_eq!(result.questions_attempted, 2);
    assert_eq!(result.correct_answers, 1);
    assert_eq!(result.score_percentage, 50.0);

    let partial = grader.grade("S1", &Submission::new("S1", [("1", "B")]).answers);
    let q2 = partial.detail("2").unwrap();
    assert_eq!(q2.student_answer, None);
    assert!(!q2.is_correct);
    assert_eq!(partial.questions_attempted, 1);
}

#[test]
fn batch_keeps_only_well_formed_submissions() {
    let grader = Grader::new(key(&[("1", "B"), ("2", "A")]));
    let submissions = vec![
        Submission::new("S1", [("1", "B")]),
        Submission::new("S2", Vec::<(String, String)>::new()),
    ];

    let outcome = grader.grade_batch(&submissions);
    assert_eq!(outcome.results.len(), 1);
    assert_eq!(outcome.results[0].student_id, "S1");
}

#[test]
fn median_uses_index_half_and_empty_has_no_statistics() {
    let answer_key = key(&[("1", "A"), ("2", "B"), ("3", "C"), ("4", "D"), ("5", "E")]);
    let grader = Grader::new(answer_key.clone());
    let aggregator = StatisticsAggregator::new();

    assert!(aggregator.aggregate(&answer_key, &[]).is_none());

    let results = vec![
        grader.grade("S1", &Submission::new("S1", [("1", "A"), ("2", "B"), ("3", "C")]).answers),
        grader.grade("S2", &Submission::new("S2", [("1", "A"), ("2", "B")]).answers),
    ];
    let stats = aggregator.aggregate(&answer_key, &results).unwrap();

    assert_eq!(stats.median_score, 60.0);
    assert_eq!(stats.average_score, 50.0);
    assert_eq!(stats.highest_score, 60.0);
    assert_eq!(stats.lowest_score, 40.0);
}

//! @ai:module:intent CLI for the MCQ grader
//! @ai:module:layer presentation

use anyhow::Result;
use clap::{Parser, Subcommand};
use mcq_grader::{
    config::GraderConfig,
    pipeline::{GradingPipeline, RunInputs, RunOutput},
    report::{ExportKind, ExportOptions, FeedbackFormatter, RunSummary, StudentRecord},
    GraderError,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "mcq-grader")]
#[command(about = "Grade multiple-choice submissions and export feedback and statistics")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a batch of submissions and export reports
    Grade {
        /// Path to answer key JSON file
        #[arg(long)]
        answer_key: PathBuf,

        /// Path to student submissions JSON file
        #[arg(long)]
        submissions: PathBuf,

        /// Path to question text JSON file
        #[arg(long)]
        question_text: Option<PathBuf>,

        /// Directory for output files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Filename for results CSV
        #[arg(long)]
        results_csv: Option<String>,

        /// Filename for statistics JSON
        #[arg(long)]
        stats_json: Option<String>,

        /// Print feedback for a specific student ID
        #[arg(long)]
        student_id: Option<String>,
    },

    /// Show the summary of the last grading run
    Results {
        /// Directory holding the last run
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Print the path of an export from the last run (csv, json or markdown)
    Fetch {
        kind: ExportKind,

        /// Directory holding the last run
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Show one student's row from the last results table
    Student {
        student_id: String,

        /// Directory holding the last run
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Initialize default configuration
    Init {
        /// Output path for config file
        #[arg(short, long, default_value = "grader.toml")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("mcq_grader=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let config = load_or_default_config(cli.config)?;

    match cli.command {
        Commands::Grade {
            answer_key,
            submissions,
            question_text,
            output_dir,
            results_csv,
            stats_json,
            student_id,
        } => grade(
            config,
            GradeArgs {
                inputs: RunInputs {
                    answer_key,
                    submissions,
                    question_text,
                },
                output_dir,
                results_csv,
                stats_json,
                student_id,
            },
        ),
        Commands::Results { output_dir } => show_results(&config, output_dir),
        Commands::Fetch { kind, output_dir } => fetch_export(&config, kind, output_dir),
        Commands::Student {
            student_id,
            output_dir,
        } => show_student(&config, &student_id, output_dir),
        Commands::Init { output } => init_config(output),
    }
}

struct GradeArgs {
    inputs: RunInputs,
    output_dir: Option<PathBuf>,
    results_csv: Option<String>,
    stats_json: Option<String>,
    student_id: Option<String>,
}

/// @ai:intent Run a full grading pass
/// @ai:effects fs:read, fs:write, io
fn grade(config: GraderConfig, args: GradeArgs) -> Result<()> {
    let config = config.with_output_dir(args.output_dir);

    let options = ExportOptions {
        results_csv: args.results_csv,
        stats_json: args.stats_json,
        ..ExportOptions::new(config.paths.output_dir.clone(), config.export.clone())
    };

    let pipeline = GradingPipeline::new(config);
    let output = pipeline.run_files(&args.inputs, &options)?;

    println!("Results exported to: {}", output.paths.csv.display());
    println!("Statistics exported to: {}", output.paths.json.display());

    if let Some(markdown) = &output.paths.markdown {
        println!("Summary exported to: {}", markdown.display());
    }

    print_summary(&output);

    if let Some(student_id) = args.student_id {
        print_student_feedback(&output, &student_id);
    }

    Ok(())
}

/// @ai:intent Print headline statistics of a run
/// @ai:effects io
fn print_summary(output: &RunOutput) {
    let stats = &output.stats;

    println!();
    println!("Summary:");
    println!("Total submissions: {}", stats.total_submissions);

    if output.outcome.skipped > 0 {
        println!("Skipped submissions: {}", output.outcome.skipped);
    }

    println!("Average score: {:.1}%", stats.average_score);
    println!("Highest score: {:.1}%", stats.highest_score);
    println!("Lowest score: {:.1}%", stats.lowest_score);
    println!("Median score: {:.1}%", stats.median_score);
}

/// @ai:intent Print feedback for one student, or a not-found line
/// @ai:effects io
fn print_student_feedback(output: &RunOutput, student_id: &str) {
    match output.result_for(student_id) {
        Some(result) => {
            println!();
            println!("Student Feedback:");
            println!("{}", "=".repeat(50));
            println!(
                "{}",
                FeedbackFormatter::new().format(result, output.question_text.as_ref())
            );
        }
        None => {
            println!();
            println!("Error: Student ID {} not found in submissions.", student_id);
        }
    }
}

/// @ai:intent Resolve the run summary location for read commands
/// @ai:effects pure
fn summary_path(config: &GraderConfig, output_dir: Option<PathBuf>) -> PathBuf {
    config.clone().with_output_dir(output_dir).summary_path()
}

/// @ai:intent Print the last run summary
/// @ai:effects fs:read, io
fn show_results(config: &GraderConfig, output_dir: Option<PathBuf>) -> Result<()> {
    let summary = RunSummary::load(&summary_path(config, output_dir))?;
    let stats = &summary.stats_summary;

    println!("Last Grading Run");
    println!("================");
    println!();
    println!("{:<25} {:>10}", "Graded submissions:", summary.results_count);
    println!("{:<25} {:>10}", "Skipped submissions:", summary.skipped_count);
    println!("{:<25} {:>9.1}%", "Average score:", stats.average_score);
    println!("{:<25} {:>9.1}%", "Highest score:", stats.highest_score);
    println!("{:<25} {:>9.1}%", "Lowest score:", stats.lowest_score);
    println!();
    println!("Results CSV:     {}", summary.csv_path.display());
    println!("Statistics JSON: {}", summary.json_path.display());

    if let Some(markdown) = &summary.markdown_path {
        println!("Summary:         {}", markdown.display());
    }

    Ok(())
}

/// @ai:intent Print the path of one export from the last run
/// @ai:effects fs:read, io
fn fetch_export(config: &GraderConfig, kind: ExportKind, output_dir: Option<PathBuf>) -> Result<()> {
    let summary = RunSummary::load(&summary_path(config, output_dir))?;
    println!("{}", summary.export_path(kind)?.display());
    Ok(())
}

/// @ai:intent Print a student's row re-derived from the last results table
/// @ai:effects fs:read, io
fn show_student(config: &GraderConfig, student_id: &str, output_dir: Option<PathBuf>) -> Result<()> {
    let summary = RunSummary::load(&summary_path(config, output_dir))?;

    let record = match StudentRecord::find(&summary.csv_path, student_id) {
        Ok(record) => record,
        Err(GraderError::StudentNotFound(id)) => {
            println!("Student {} not found", id);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    println!("Student: {}", student_id);
    println!("{}", "-".repeat(50));

    for (column, value) in &record.fields {
        println!("{:<25} {}", column, value);
    }

    Ok(())
}

/// @ai:intent Initialize default configuration file
/// @ai:effects fs:write
fn init_config(output: PathBuf) -> Result<()> {
    let config = GraderConfig::default();
    config.save(&output)?;
    println!("Configuration saved to {}", output.display());
    Ok(())
}

/// @ai:intent Load configuration or use defaults
/// @ai:effects fs:read
fn load_or_default_config(path: Option<PathBuf>) -> Result<GraderConfig> {
    match path {
        Some(p) => GraderConfig::load(&p),
        None => {
            let default_path = PathBuf::from("grader.toml");

            if default_path.exists() {
                GraderConfig::load(&default_path)
            } else {
                Ok(GraderConfig::default())
            }
        }
    }
}

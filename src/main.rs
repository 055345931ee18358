use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;

use agreemate::scoring::{Record, ScoreSet};
use agreemate::{config, dataset, report, scoring};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 3;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compare one pair of score sets given as inline JSON objects
    Single {
        /// Record identifier shown in the report
        #[arg(long, default_value = "adhoc")]
        id: String,

        /// AI scores as a JSON object, e.g. '{"Clarity": 2, "Sentiment": 3}'
        #[arg(long)]
        ai: String,

        /// Human scores as a JSON object covering the same dimensions
        #[arg(long)]
        human: String,
    },
    /// Score a CSV of records and print the batch summary
    Batch {
        /// CSV file with chat_id, ai_<Dimension> and human_<Dimension> columns
        file: PathBuf,

        /// Write a results CSV to this path
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write a results CSV to a timestamped default filename
        #[arg(long, conflicts_with = "output")]
        save: bool,
    },
    /// Print the sample CSV template
    Template {
        /// Write the template to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run the built-in reference record and check the result
    Quicktest,
}

#[derive(Parser, Debug)]
#[command(name = "agreemate")]
#[command(about = "QA scorer vs human analyst agreement CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/agreemate/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

fn parse_score_json(raw: &str) -> anyhow::Result<ScoreSet> {
    serde_json::from_str(raw).context("expected a JSON object of dimension -> integer score")
}

fn main() {
    let cli = Cli::parse();
    let start_time = Instant::now();

    // Load config
    let config_path = cli.config.clone().map(PathBuf::from);
    let config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if cli.verbose {
        eprintln!("Dimensions: {}", config.dimensions.join(", "));
    }

    let use_colors = report::should_use_colors();

    match cli.command {
        Commands::Single { id, ai, human } => {
            let ai_scores = match parse_score_json(&ai) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Invalid --ai scores: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            let human_scores = match parse_score_json(&human) {
                Ok(s) => s,
                Err(e) => {
                    eprintln!("Invalid --human scores: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let record = Record {
                id,
                ai: ai_scores,
                human: human_scores,
            };
            let result = match scoring::compare(&record.ai, &record.human) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let order = report::display_order(&result, &config.dimensions);
            println!(
                "{}",
                report::format_comparison(&record, &result, &order, use_colors)
            );
        }
        Commands::Batch { file, output, save } => {
            let content = match std::fs::read_to_string(&file) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("Failed to read {}: {}", file.display(), e);
                    std::process::exit(EXIT_IO);
                }
            };

            let records = match dataset::parse_records(&content) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("CSV error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            if cli.verbose {
                eprintln!("Parsed {} records from {}", records.len(), file.display());
            }

            if let Err(errors) = dataset::validate_records(&records) {
                eprintln!("Score validation errors:");
                for error in errors {
                    eprintln!("  - {}", error);
                }
                std::process::exit(EXIT_INPUT);
            }

            let batch = match scoring::compare_batch(&records) {
                Ok(b) => b,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            println!("{}", report::format_batch(&records, &batch, use_colors));

            let results_path = if save {
                Some(dataset::default_results_path())
            } else {
                output
            };
            if let Some(path) = results_path {
                if let Err(e) = dataset::write_results(&path, &records, &batch) {
                    eprintln!("Failed to write results: {:#}", e);
                    std::process::exit(EXIT_IO);
                }
                println!("Results written to {}", path.display());
            }
        }
        Commands::Template { output } => {
            let template = dataset::template_csv();
            match output {
                Some(path) => {
                    if let Err(e) = std::fs::write(&path, &template) {
                        eprintln!("Failed to write template to {}: {}", path.display(), e);
                        std::process::exit(EXIT_IO);
                    }
                    println!("Template written to {}", path.display());
                }
                None => print!("{}", template),
            }
        }
        Commands::Quicktest => {
            let record = dataset::quicktest_record();
            let result = match scoring::compare(&record.ai, &record.human) {
                Ok(r) => r,
                Err(e) => {
                    eprintln!("{}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };

            let order = report::display_order(&result, &config.dimensions);
            println!(
                "{}",
                report::format_comparison(&record, &result, &order, use_colors)
            );

            let expected = dataset::QUICKTEST_EXPECTED_MAE;
            if (result.mean_absolute_error - expected).abs() < 0.01 {
                println!("MAE matches the expected {:.2}", expected);
            } else {
                eprintln!(
                    "MAE {:.2} does not match the expected {:.2}",
                    result.mean_absolute_error, expected
                );
                std::process::exit(EXIT_INPUT);
            }
        }
    }

    if cli.verbose {
        eprintln!("Done in {:?}", start_time.elapsed());
    }

    std::process::exit(EXIT_SUCCESS);
}

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use tracing::info;

use gutguardian::history::HealthHistory;
use gutguardian::models::{DailyInput, HealthScore, StoolConsistency, Symptoms};
use gutguardian::{health, ingest, report, telemetry};

#[derive(Parser)]
#[command(name = "gutguardian")]
#[command(about = "Daily gut health scoring for pets", long_about = None)]
struct Cli {
    /// Seed the score noise for repeatable output
    #[arg(long, global = true)]
    seed: Option<u64>,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a single daily check
    Check {
        #[command(flatten)]
        input: CheckArgs,
        /// Print the score as JSON
        #[arg(long)]
        json: bool,
    },
    /// Score every daily check in a CSV file
    Score {
        #[arg(long)]
        csv: PathBuf,
        #[arg(long, default_value_t = 30)]
        limit: usize,
    },
    /// Generate a markdown report from a CSV file of daily checks
    Report {
        #[arg(long)]
        csv: PathBuf,
        /// Pet profile as JSON (name, species, breed, age, weight, createdAt)
        #[arg(long)]
        pet: Option<PathBuf>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Print the scored history of a CSV file as JSON
    History {
        #[arg(long)]
        csv: PathBuf,
        /// Earlier `history` output to append the new checks to
        #[arg(long)]
        from: Option<PathBuf>,
    },
}

#[derive(Args)]
struct CheckArgs {
    #[arg(long, allow_negative_numbers = true)]
    meals: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    treats: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    water_intake: Option<i32>,
    /// Milk was given today
    #[arg(long)]
    milk: bool,
    #[arg(long, allow_negative_numbers = true)]
    activity_level: Option<i32>,
    #[arg(long, allow_negative_numbers = true)]
    bathroom_frequency: Option<i32>,
    #[arg(long, value_enum)]
    stool: Option<StoolConsistency>,
    #[arg(long)]
    vomiting: bool,
    #[arg(long)]
    diarrhea: bool,
    #[arg(long)]
    lethargy: bool,
}

impl From<CheckArgs> for DailyInput {
    fn from(args: CheckArgs) -> Self {
        DailyInput {
            meals: args.meals,
            treats: args.treats,
            water_intake: args.water_intake,
            milk_intake: Some(args.milk),
            activity_level: args.activity_level,
            bathroom_frequency: args.bathroom_frequency,
            stool_consistency: args.stool,
            symptoms: Some(Symptoms {
                vomiting: args.vomiting,
                diarrhea: args.diarrhea,
                lethargy: args.lethargy,
            }),
        }
    }
}

fn noise_source(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => Box::new(StdRng::seed_from_u64(seed)),
        None => Box::new(rand::thread_rng()),
    }
}

fn print_score(score: &HealthScore) {
    println!("Score {:.1} (level {})", score.score, score.level);
    println!("{}", health::advice_for_score(score.score));

    if score.alerts.is_empty() {
        println!("No alerts.");
        return;
    }

    println!("Alerts:");
    for alert in score.alerts.iter() {
        println!(
            "- [{}] {} ({}): {}",
            alert.severity.as_str(),
            alert.title,
            alert.id,
            alert.recommendation
        );
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;
    let mut rng = noise_source(cli.seed);

    match cli.command {
        Commands::Check { input, json } => {
            let input = DailyInput::from(input);
            let score = health::evaluate_with_rng(&input, &mut rng);
            info!(score = score.score, level = score.level, "evaluated daily check");

            if json {
                println!("{}", serde_json::to_string_pretty(&score)?);
            } else {
                print_score(&score);
            }
        }
        Commands::Score { csv, limit } => {
            let checks = ingest::read_checks(&csv)?;
            let history = ingest::score_checks(&checks, &mut rng);

            if history.is_empty() {
                println!("No daily checks found in {}.", csv.display());
                return Ok(());
            }

            for entry in history.entries().iter().take(limit) {
                let alert_ids: Vec<&str> =
                    entry.alerts.iter().map(|alert| alert.id.as_str()).collect();
                println!(
                    "- {} score {:.1} level {} alerts [{}]",
                    entry.last_updated.date_naive(),
                    entry.score,
                    entry.level,
                    alert_ids.join(", ")
                );
            }
        }
        Commands::Report { csv, pet, out } => {
            let pet = pet.as_deref().map(ingest::read_pet).transpose()?;
            let checks = ingest::read_checks(&csv)?;
            let history = ingest::score_checks(&checks, &mut rng);
            let report = report::build_report(pet.as_ref(), &history);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            info!(checks = history.len(), "report generated");
            println!("Report written to {}.", out.display());
        }
        Commands::History { csv, from } => {
            let previous = match from {
                Some(path) => ingest::read_history(&path)?,
                None => HealthHistory::new(),
            };
            let checks = ingest::read_checks(&csv)?;
            let history = ingest::append_checks(previous, &checks, &mut rng);
            println!("{}", serde_json::to_string_pretty(&history)?);
        }
    }

    Ok(())
}

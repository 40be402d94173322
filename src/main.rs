use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use tracing::{error, info, warn};

use u_staffing::config::{self, AppConfig, OutputFormat};
use u_staffing::generator;
use u_staffing::logging;
use u_staffing::models::CoverageRequest;
use u_staffing::roster::{infeasible_message, Roster};
use u_staffing::scheduler::{CoverageKpi, GreedyCoverScheduler};
use u_staffing::validation::{validate_input, validate_input_strict, validate_schedule};
use u_staffing::Error;

/// Exit code when the curriculum cannot be covered.
const EXIT_INFEASIBLE: u8 = 2;

#[derive(Parser, Debug)]
#[command(name = "u-staffing", version, about = "Greedy teacher-to-subject coverage")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Schedule a problem loaded from a .toml or .json file
    Schedule {
        /// Problem file
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Schedule the built-in demo instance
    Demo {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Generate a random problem instance
    Generate {
        /// RNG seed
        #[arg(short, long, default_value_t = 42)]
        seed: u64,

        /// Number of subjects
        #[arg(long)]
        subjects: Option<usize>,

        /// Number of teachers
        #[arg(long)]
        teachers: Option<usize>,

        /// Write to a .toml or .json file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Omit the KPI summary
    #[arg(long)]
    no_kpi: bool,

    /// Abort when input validation reports blocking problems
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let app_config = match &cli.config {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => AppConfig::default(),
    };

    let verbose = cli.verbose || app_config.logging.verbose;
    if cli.json_logs || app_config.logging.json {
        logging::init_json_logger(verbose);
    } else {
        logging::init_cli_logger(verbose);
    }

    match cli.command {
        Command::Schedule { input, output } => {
            let request = config::load_request(&input)
                .with_context(|| format!("failed to load problem {}", input.display()))?;
            run_schedule(&request, &app_config, &output)
        }
        Command::Demo { output } => run_schedule(&generator::demo_request(), &app_config, &output),
        Command::Generate {
            seed,
            subjects,
            teachers,
            output,
        } => {
            let mut gen_config = app_config.generator.clone();
            if let Some(n) = subjects {
                gen_config.num_subjects = n;
            }
            if let Some(n) = teachers {
                gen_config.num_teachers = n;
            }

            let request = generator::generate_seeded(&gen_config, seed);
            info!(
                seed,
                subjects = request.subjects.len(),
                teachers = request.teachers.len(),
                "generated instance"
            );

            match output {
                Some(path) => {
                    config::save_request(&path, &request)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    println!("Wrote {}", path.display());
                }
                None => println!("{}", serde_json::to_string_pretty(&request)?),
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_schedule(
    request: &CoverageRequest,
    app_config: &AppConfig,
    args: &OutputArgs,
) -> anyhow::Result<ExitCode> {
    let format = args.format.unwrap_or(app_config.output.format);
    let show_kpi = app_config.output.show_kpi && !args.no_kpi;

    if let Err(errors) = validate_input(&request.subjects, &request.teachers) {
        for e in &errors {
            warn!(kind = ?e.kind, "{}", e.message);
        }
        if args.strict {
            validate_input_strict(&request.subjects, &request.teachers).map_err(Error::from)?;
        }
    }

    info!(
        subjects = request.subjects.len(),
        teachers = request.teachers.len(),
        "scheduling"
    );

    match GreedyCoverScheduler::new().schedule_request(request) {
        Ok(schedule) => {
            let violations = validate_schedule(&schedule, &request.subjects, &request.teachers);
            for v in &violations {
                error!(kind = ?v.violation_type, "{}", v.message);
            }

            let kpi = CoverageKpi::calculate(&schedule, &request.subjects, &request.teachers);
            info!(
                teachers_used = kpi.teachers_used,
                subjects_covered = kpi.subjects_covered,
                "schedule created"
            );

            match format {
                OutputFormat::Text => {
                    let roster = Roster::new(&schedule, &request.teachers);
                    if show_kpi {
                        print!("{}", roster.with_kpi(&kpi));
                    } else {
                        print!("{roster}");
                    }
                }
                OutputFormat::Json => {
                    let report = if show_kpi {
                        json!({ "schedule": schedule, "kpi": kpi })
                    } else {
                        json!({ "schedule": schedule })
                    };
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(infeasible) => {
            warn!(uncovered = infeasible.uncovered.len(), "{infeasible}");
            match format {
                OutputFormat::Text => eprintln!("{}", infeasible_message(&infeasible)),
                OutputFormat::Json => {
                    let report = json!({
                        "infeasible": {
                            "uncovered": infeasible.uncovered,
                            "partial": infeasible.partial,
                        }
                    });
                    println!("{}", serde_json::to_string_pretty(&report)?);
                }
            }
            Ok(ExitCode::from(EXIT_INFEASIBLE))
        }
    }
}

//! `prayercheck`: sanity check an extracted prayer-time schedule.
//!
//! Exit codes let an extraction pipeline decide whether to retry:
//! 0 accept, 1 reject, 2 warnings under `--deny-warnings`, 3 when the
//! schedule or config cannot be loaded.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use prayercheck_core::{
    CheckResult, CheckerConfig, MonthlyPrayerSchedule, RuleFindings, SanityChecker, Verdict,
};

#[derive(Parser, Debug)]
#[command(name = "prayercheck", version, about = "Sanity check OCR-extracted prayer timetables")]
struct Cli {
    /// Log rule-level detail to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a schedule file (JSON, or YAML by extension)
    Check {
        /// Path to the extracted schedule
        file: PathBuf,

        /// Checker configuration (YAML, or JSON by extension)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,

        /// Exit with 2 when the schedule only has warnings
        #[arg(long)]
        deny_warnings: bool,
    },

    /// Print the default checker configuration as YAML
    Config,

    /// Resolve a month name to its number
    Month {
        /// Month name in any supported language
        name: String,

        /// Checker configuration providing extra month aliases
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

/// JSON output: the result plus what each rule found.
#[derive(Serialize)]
struct JsonOutput<'a> {
    verdict: Verdict,
    result: &'a CheckResult,
    rules: &'a [RuleFindings],
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_checker(config: Option<&PathBuf>) -> Result<SanityChecker> {
    let config = match config {
        Some(path) => CheckerConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CheckerConfig::default(),
    };
    Ok(SanityChecker::with_config(config))
}

/// Exit code when the schedule or config cannot be loaded.
const LOAD_FAILURE: u8 = 3;

fn exit_code(verdict: Verdict, deny_warnings: bool) -> u8 {
    match verdict {
        Verdict::Accept => 0,
        Verdict::AcceptWithCaveats if deny_warnings => 2,
        Verdict::AcceptWithCaveats => 0,
        Verdict::Reject => 1,
    }
}

fn run(cli: Cli) -> Result<u8> {
    match cli.command {
        Command::Check {
            file,
            config,
            format,
            deny_warnings,
        } => {
            let checker = load_checker(config.as_ref())?;
            let schedule = MonthlyPrayerSchedule::from_file(&file)
                .with_context(|| format!("Failed to read schedule {}", file.display()))?;

            tracing::debug!(
                file = %file.display(),
                days = schedule.days.len(),
                "Schedule loaded"
            );

            let rules = checker.run_rules(&schedule);
            let result = SanityChecker::aggregate(&schedule, &rules);
            let verdict = result.verdict();

            match format {
                Format::Text => println!("{}", result),
                Format::Json => {
                    let output = JsonOutput {
                        verdict,
                        result: &result,
                        rules: &rules,
                    };
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
            }

            Ok(exit_code(verdict, deny_warnings))
        }

        Command::Config => {
            let yaml = CheckerConfig::default().to_yaml()?;
            print!("{}", yaml);
            Ok(0)
        }

        Command::Month { name, config } => {
            let checker = load_checker(config.as_ref())?;
            match checker.months().resolve(&name) {
                Some(month) => {
                    println!("{}", month);
                    Ok(0)
                }
                None => {
                    eprintln!("Unrecognised month name '{}'", name);
                    Ok(1)
                }
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(LOAD_FAILURE)
        }
    }
}

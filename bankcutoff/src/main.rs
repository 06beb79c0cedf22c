//! `bankcutoff` command-line front end.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bankcutoff::time::observed_holidays;
use bankcutoff::{CutoffEngine, CutoffTable, Date, Decision, Rail, TimeOfDay};
use chrono::Timelike;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bankcutoff")]
#[command(about = "Bank transfer cutoff checker (Eastern Time)")]
struct Cli {
    /// Log decisions at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check when a transfer will process
    Check {
        /// Bank identifier (see `bankcutoff banks`)
        #[arg(long)]
        bank: String,
        /// Rail: ach_standard, ach_sameday, or wire
        #[arg(long)]
        rail: String,
        /// Submission date (YYYY-MM-DD, Eastern Time); defaults to today in New York
        #[arg(long)]
        date: Option<String>,
        /// Submission time (HH:MM, 24-hour, Eastern Time); defaults to now in New York
        #[arg(long)]
        time: Option<String>,
        /// Also accept times such as "4:30 pm"
        #[arg(long)]
        lenient_time: bool,
        /// Cutoff table JSON file (defaults to the built-in table)
        #[arg(long)]
        table: Option<PathBuf>,
        /// Print the decision as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the observed US federal holidays of a year
    Holidays {
        /// Year (1900-2199)
        #[arg(value_parser = clap::value_parser!(u16).range(1900..=2199))]
        year: u16,
    },

    /// List banks, rails, and cutoffs
    Banks {
        /// Cutoff table JSON file (defaults to the built-in table)
        #[arg(long)]
        table: Option<PathBuf>,
        /// Print the table in its JSON file format
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn load_table(path: Option<&PathBuf>) -> Result<CutoffTable> {
    match path {
        Some(p) => {
            let table = CutoffTable::from_path(p);
            table.with_context(|| format!("loading {}", p.display()))
        }
        None => {
            tracing::debug!("using built-in cutoff table");
            Ok(CutoffTable::builtin())
        }
    }
}

/// Current date and wall-clock time in New York.
fn now_eastern() -> Result<(Date, TimeOfDay)> {
    let now = chrono::Utc::now().with_timezone(&chrono_tz::America::New_York);
    let date = Date::try_from(now.date_naive())?;
    let time = TimeOfDay::from_hm(now.hour() as u8, now.minute() as u8)?;
    Ok((date, time))
}

fn run(cli: Cli, out: &mut impl Write) -> Result<()> {
    match cli.command {
        Commands::Check {
            bank,
            rail,
            date,
            time,
            lenient_time,
            table,
            json,
        } => {
            let engine = CutoffEngine::new(load_table(table.as_ref())?);
            let (date, time) = match (date, time) {
                (Some(d), Some(t)) => (d, t),
                (d, t) => {
                    let (today, now) = now_eastern()?;
                    (
                        d.unwrap_or_else(|| today.to_string()),
                        t.unwrap_or_else(|| now.to_string()),
                    )
                }
            };
            let decision = if lenient_time {
                engine.decide_str_lenient(&bank, &rail, &date, &time)?
            } else {
                engine.decide_str(&bank, &rail, &date, &time)?
            };
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&decision)?)?;
            } else {
                write_decision(out, engine.table(), &bank, &rail, &decision)?;
            }
        }
        Commands::Holidays { year } => {
            for (date, holiday) in observed_holidays(year).iter() {
                writeln!(out, "{date}  {:<9}  {holiday}", date.weekday().name())?;
            }
        }
        Commands::Banks { table, json } => {
            let table = load_table(table.as_ref())?;
            if json {
                writeln!(out, "{}", table.to_json()?)?;
            } else {
                for bank in table.banks() {
                    let cutoffs: Vec<String> = Rail::ALL
                        .into_iter()
                        .map(|r| match table.cutoff(&bank.id, r) {
                            Some(t) => format!("{}={t}", r.id()),
                            None => format!("{}=-", r.id()),
                        })
                        .collect();
                    let cutoffs = cutoffs.join("  ");
                    writeln!(out, "{:<12} {:<16} {cutoffs}", bank.id, bank.name)?;
                }
            }
        }
    }
    Ok(())
}

fn write_decision(
    out: &mut impl Write,
    table: &CutoffTable,
    bank_id: &str,
    rail_id: &str,
    d: &Decision,
) -> Result<()> {
    let bank = table
        .bank(bank_id.trim())
        .map_or("Selected bank", |b| b.name.as_str());
    let rail = rail_id.parse::<Rail>().map_or("Selected transfer", |r| r.name());
    writeln!(out, "{}", d.headline())?;
    writeln!(
        out,
        "Result: {rail} at {bank} should process on {}.",
        d.processes_on.long_format()
    )?;
    writeln!(
        out,
        "{} (All cutoffs are treated as Eastern Time.)",
        d.detail
    )?;
    writeln!(
        out,
        "Cutoff used: {} ET  •  Input time: {} ET  •  Date: {}",
        d.cutoff, d.submitted, d.submitted_on
    )?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli, &mut std::io::stdout().lock())
}

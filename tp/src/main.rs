//! TourPlan - personalized tour plan bot
//!
//! CLI entry point for saving preferences and printing itineraries.

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};

use prefstore::SqlitePreferenceStore;
use tourplan::chat::{ChatSession, ReadlinePrompter};
use tourplan::cli::{Cli, Command, OutputFormat};
use tourplan::config::Config;
use tourplan::itinerary::{self, ItineraryDocument};
use tourplan::session::{Greeting, Planner};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > WARN
    let level = match cli_log_level.or(config_log_level).map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") | None => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", other);
            tracing::Level::WARN
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to install subscriber: {}", e))?;

    debug!(?level, "Logging initialized");
    Ok(())
}

fn open_planner(config: &Config) -> Result<Planner<SqlitePreferenceStore>> {
    let store = SqlitePreferenceStore::open_with_timeout(&config.store_path, config.busy_timeout())
        .context(format!("Failed to open preference store at {}", config.store_path.display()))?;
    Ok(Planner::new(store)?)
}

fn emit<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Yaml => print!("{}", serde_yaml::to_string(value)?),
        _ => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

fn print_document(document: &ItineraryDocument, format: OutputFormat) -> Result<()> {
    if document.used_default_window() {
        eprintln!(
            "{} Couldn't read that time range, assuming {} - {}.",
            "warning:".yellow(),
            document.time_range.start,
            document.time_range.end
        );
    }
    match format {
        OutputFormat::Text => print!("{}", document),
        _ => emit(document, format)?,
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!(store = %config.store_path.display(), "tourplan starting");

    match cli.command {
        Command::Plan { user, trip, format } => {
            let planner = open_planner(&config)?;
            let record = trip.into_record(user);
            let document = planner.plan(&record)?;
            print_document(&document, format)?;
        }
        Command::Recall { user, format } => {
            let planner = open_planner(&config)?;
            let record = planner.recall(&user)?;
            match format {
                OutputFormat::Text => {
                    println!("{}", Greeting::from_record(record.as_ref()));
                    match record {
                        Some(r) => {
                            println!("  {} {}", "City:".dimmed(), r.city);
                            println!("  {} {}", "Available Time:".dimmed(), r.available_time);
                            println!("  {} {}", "Budget:".dimmed(), r.budget);
                            println!("  {} {}", "Interests:".dimmed(), r.interests);
                            println!("  {} {}", "Starting Point:".dimmed(), r.starting_point);
                        }
                        None => println!("No saved preferences for {}", user.cyan()),
                    }
                }
                _ => emit(&record, format)?,
            }
        }
        Command::Preview { trip, format } => {
            let document = itinerary::generate(&trip.city, &trip.time, &trip.budget, &trip.interests, &trip.start);
            print_document(&document, format)?;
        }
        Command::Chat { user } => {
            let planner = open_planner(&config)?;
            let prompter = ReadlinePrompter::new()?;
            ChatSession::new(&planner, prompter, std::io::stdout()).run(user)?;
        }
    }

    Ok(())
}

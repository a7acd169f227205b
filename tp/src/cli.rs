//! CLI argument parsing for tourplan

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use prefstore::PreferenceRecord;

/// TourPlan - personalized day itineraries
#[derive(Parser, Debug)]
#[command(name = "tp")]
#[command(author, version, about = "Personalized tour plans from saved visitor preferences", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save a visitor's preferences and print their itinerary
    Plan {
        /// Visitor id
        #[arg(short, long)]
        user: String,

        #[command(flatten)]
        trip: TripArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Show what a visitor saved last time
    Recall {
        /// Visitor id
        #[arg(required = true)]
        user: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Print an itinerary without saving anything
    Preview {
        #[command(flatten)]
        trip: TripArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Plan a trip interactively
    Chat {
        /// Visitor id (asked for when omitted)
        #[arg(short, long)]
        user: Option<String>,
    },
}

/// The five trip answers
#[derive(Args, Debug, Clone)]
pub struct TripArgs {
    /// City being visited
    #[arg(long)]
    pub city: String,

    /// Time window, e.g. "10am - 4pm"
    #[arg(short, long)]
    pub time: String,

    /// Budget for the day
    #[arg(short, long)]
    pub budget: String,

    /// Interests, e.g. food, culture, shopping
    #[arg(short, long)]
    pub interests: String,

    /// Hotel or first attraction
    #[arg(short, long)]
    pub start: String,
}

impl TripArgs {
    /// Pair the answers with a visitor id
    pub fn into_record(self, user_id: impl Into<String>) -> PreferenceRecord {
        PreferenceRecord::new(user_id, self.city, self.time, self.budget, self.interests, self.start)
    }
}

/// Output format for documents and records
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(format!("Unknown format: {}. Use: text, json, or yaml", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_plan() {
        let cli = Cli::try_parse_from([
            "tp", "plan", "--user", "u1", "--city", "Paris", "--time", "10am - 4pm", "--budget", "$100",
            "--interests", "food", "--start", "Hotel Lumen",
        ])
        .unwrap();

        match cli.command {
            Command::Plan { user, trip, format } => {
                assert_eq!(format, OutputFormat::Text);
                let record = trip.into_record(user);
                assert_eq!(
                    record,
                    PreferenceRecord::new("u1", "Paris", "10am - 4pm", "$100", "food", "Hotel Lumen")
                );
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_plan_requires_all_fields() {
        let result = Cli::try_parse_from(["tp", "plan", "--user", "u1", "--city", "Paris"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_output_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("yml".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
        assert_eq!("plain".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("table".parse::<OutputFormat>().is_err());
    }
}

//! CLI entry point for the `routes` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use town_routes::cli::commands;
use town_routes::config;
use town_routes::engine::{QueryEngine, StopLimit};
use town_routes::RouteError;

#[derive(Parser)]
#[command(
    name = "routes",
    about = "Distance, trip-count and shortest-route queries over a town route list"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Path to a TOML config file (falls back to $ROUTES_CONFIG)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display information about a route list
    Info {
        /// Route list, one "origin,destination,distance" per line
        file: PathBuf,
    },
    /// Distance along an explicit sequence of towns
    Distance {
        /// Route list file
        file: PathBuf,
        /// Towns to visit in order (at least two)
        #[arg(required = true, num_args = 2..)]
        towns: Vec<String>,
    },
    /// Count trips bounded by number of stops
    Trips {
        /// Route list file
        file: PathBuf,
        /// Starting town
        from: String,
        /// Destination town
        to: String,
        /// Count trips with at most this many stops
        #[arg(long, allow_negative_numbers = true, conflicts_with = "exact_stops")]
        max_stops: Option<i64>,
        /// Count trips with exactly this many stops
        #[arg(long, allow_negative_numbers = true)]
        exact_stops: Option<i64>,
    },
    /// Shortest route between two towns
    Shortest {
        /// Route list file
        file: PathBuf,
        /// Starting town
        from: String,
        /// Destination town
        to: String,
    },
    /// Count trips with total distance below a bound
    TripsWithin {
        /// Route list file
        file: PathBuf,
        /// Starting town
        from: String,
        /// Destination town
        to: String,
        /// Trips must be strictly shorter than this
        #[arg(long, allow_negative_numbers = true)]
        max_distance: i64,
    },
    /// Run the ten standard queries over towns A to E
    Report {
        /// Route list file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = config::load_or_default(cli.config.as_deref()).and_then(|cfg| {
        let engine = QueryEngine::with_limits(cfg.limits);
        match cli.command {
            Commands::Info { file } => commands::cmd_info(&file, json),
            Commands::Distance { file, towns } => {
                commands::cmd_distance(&file, &engine, &towns, json)
            }
            Commands::Trips {
                file,
                from,
                to,
                max_stops,
                exact_stops,
            } => {
                let (stops, limit) = match (max_stops, exact_stops) {
                    (Some(n), _) => (n, StopLimit::AtMost),
                    (None, Some(n)) => (n, StopLimit::Exactly),
                    (None, None) => {
                        eprintln!("One of --max-stops or --exact-stops is required");
                        process::exit(3);
                    }
                };
                commands::cmd_trips(&file, &engine, &from, &to, stops, limit, json)
            }
            Commands::Shortest { file, from, to } => {
                commands::cmd_shortest(&file, &engine, &from, &to, json)
            }
            Commands::TripsWithin {
                file,
                from,
                to,
                max_distance,
            } => commands::cmd_trips_within(&file, &engine, &from, &to, max_distance, json),
            Commands::Report { file } => commands::cmd_report(&file, &engine, json),
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            RouteError::Io(_) => 1,
            RouteError::Parse { .. } | RouteError::Config(_) => 2,
            RouteError::InvalidBound { .. } | RouteError::PathTooShort(_) => 3,
            RouteError::SearchLimitExceeded(_) | RouteError::DistanceOverflow => 4,
        };
        process::exit(code);
    }
}

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use journey_engine::domain::{TransportMode, to_instant};
use journey_engine::fare::{RiderCategory, calculate_fare};
use journey_engine::mapper::{
    DEFAULT_TIME_ZONE, JourneyMapper, MapperConfig, parse_threshold_mins, parse_time_zone,
};
use journey_engine::trip::load_trip_response;
use journey_engine::view::{ErrorResponse, FareResult, JourneyResult};

const TIME_ZONE_VAR: &str = "JOURNEY_TIME_ZONE";
const LATE_THRESHOLD_VAR: &str = "JOURNEY_LATE_THRESHOLD_MINS";
const EARLY_THRESHOLD_VAR: &str = "JOURNEY_EARLY_THRESHOLD_MINS";

#[derive(Parser)]
#[command(name = "journey-engine", about = "Journey synthesis and fare computation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Map a saved trip-planner response into display-ready journeys
    Journeys {
        /// Path to the trip-planner JSON response
        file: PathBuf,

        /// Mapping instant (RFC 3339); defaults to the current time
        #[arg(long)]
        now: Option<String>,
    },

    /// Calculate a fare
    Fare {
        /// Adult, Child or Senior
        category: RiderCategory,

        /// Train, Metro, Light Rail, Bus, Coach or Ferry
        mode: TransportMode,

        /// Trip distance in kilometres
        distance_km: f64,

        /// Travel at peak time
        #[arg(long)]
        peak: bool,

        /// Travel on a weekend
        #[arg(long)]
        weekend: bool,

        /// Trip includes an airport station
        #[arg(long)]
        airport: bool,
    },
}

fn init_logger() {
    let default_level = LevelFilter::WARN;
    let rust_log =
        std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_else(|_| default_level.to_string());
    let env_filter = EnvFilter::try_new(rust_log).unwrap_or_else(|err| {
        eprintln!(
            "invalid {}, falling back to level '{}' - {}",
            EnvFilter::DEFAULT_ENV,
            default_level,
            err,
        );
        EnvFilter::new(default_level.to_string())
    });

    let result = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(env_filter)
        .try_init();
    if let Err(err) = result {
        eprintln!("failed to set tracing subscriber: {err}");
    }
}

/// Build the mapper configuration from the environment.
///
/// Bad values are logged and replaced by the defaults.
fn mapper_config_from_env() -> MapperConfig {
    let defaults = MapperConfig::default();

    let time_zone = match std::env::var(TIME_ZONE_VAR) {
        Ok(name) => parse_time_zone(&name).unwrap_or_else(|err| {
            warn!(error = %err, fallback = %DEFAULT_TIME_ZONE, "ignoring {TIME_ZONE_VAR}");
            DEFAULT_TIME_ZONE
        }),
        Err(_) => DEFAULT_TIME_ZONE,
    };

    let threshold = |var: &'static str, default: i64| match std::env::var(var) {
        Ok(value) => parse_threshold_mins(var, &value).unwrap_or_else(|err| {
            warn!(error = %err, fallback = default, "ignoring {var}");
            default
        }),
        Err(_) => default,
    };

    MapperConfig::new(
        time_zone,
        threshold(LATE_THRESHOLD_VAR, defaults.late_threshold_mins),
        threshold(EARLY_THRESHOLD_VAR, defaults.early_threshold_mins),
    )
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{json}");
    Ok(())
}

fn run_journeys(file: PathBuf, now: Option<String>) -> Result<(), String> {
    let now: DateTime<Utc> = match now {
        Some(text) => to_instant(&text).map_err(|e| e.to_string())?,
        None => Utc::now(),
    };

    let response = load_trip_response(&file).map_err(|e| e.to_string())?;
    let mapper = JourneyMapper::new(mapper_config_from_env());
    let config = mapper.config();
    debug!(
        time_zone = %config.time_zone,
        late_threshold_mins = config.late_threshold_mins,
        early_threshold_mins = config.early_threshold_mins,
        now = %now,
        "mapping journeys"
    );

    let results: Vec<JourneyResult> = mapper
        .map_journeys(&response.journeys, now)
        .iter()
        .map(|journey| JourneyResult::from_journey(journey, now))
        .collect();

    print_json(&results)
}

fn run_fare(
    category: RiderCategory,
    mode: TransportMode,
    distance_km: f64,
    peak: bool,
    weekend: bool,
    airport: bool,
) -> Result<(), String> {
    let fare = calculate_fare(category, mode, distance_km, peak, weekend, airport)
        .map_err(|e| e.to_string())?;
    print_json(&FareResult::from_breakdown(&fare))
}

fn main() -> ExitCode {
    init_logger();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Journeys { file, now } => run_journeys(file, now),
        Command::Fare {
            category,
            mode,
            distance_km,
            peak,
            weekend,
            airport,
        } => run_fare(category, mode, distance_km, peak, weekend, airport),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let response = ErrorResponse { error };
            match serde_json::to_string(&response) {
                Ok(json) => eprintln!("{json}"),
                Err(_) => eprintln!("{}", response.error),
            }
            ExitCode::FAILURE
        }
    }
}

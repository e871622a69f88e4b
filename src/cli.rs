//! Command-line interface parsing for the flights CLI
//!
//! This module handles parsing of CLI arguments using clap and turns them into
//! the [`Config`] that is passed to the data source and the view layer.

use std::time::Duration;

use clap::Parser;
use thiserror::Error;

use crate::data::time::DEFAULT_WIRE_FORMAT;

/// Default flights API endpoint
pub const DEFAULT_API_URL: &str = "https://www.gva.ch/api/v1/data/flights";

/// Error types for CLI argument validation
#[derive(Debug, Error)]
pub enum CliError {
    /// The API URL is empty
    #[error("Invalid API URL: must not be empty")]
    EmptyApiUrl,

    /// A timeout of zero seconds would fail every request
    #[error("Invalid API timeout: must be at least 1 second")]
    ZeroTimeout,
}

/// Geneva airport arrivals and departures in your terminal
#[derive(Parser, Debug)]
#[command(name = "gvacli")]
#[command(about = "Geneva airport arrivals and departures")]
#[command(version)]
pub struct Cli {
    /// API URL of remote webservice
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// API reply timeout (in seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 10)]
    pub api_timeout: u64,

    /// Show departures
    #[arg(short, long)]
    pub departures: bool,

    /// Show arrivals (the default when neither board is requested)
    #[arg(short, long)]
    pub arrivals: bool,

    /// Show code shares next to the flight number
    #[arg(short = 'c', long)]
    pub code_shares: bool,

    /// Show all flights, including other days and flights without gate or status
    #[arg(long = "all")]
    pub all: bool,

    /// Do not read the local cache
    #[arg(long)]
    pub no_cache: bool,

    /// Maximum age of the local cache (in seconds)
    #[arg(long, value_name = "SECONDS", default_value_t = 60)]
    pub cache_ttl: u64,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Display toggles shared by both boards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewOptions {
    /// Bypass the today-only, gate and status filters
    pub show_all_flights: bool,
    /// Append code-share flight numbers to the flight identity
    pub show_code_share: bool,
}

/// Configuration derived from CLI arguments, built once at startup
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub api_timeout: Duration,
    pub show_departures: bool,
    pub show_arrivals: bool,
    pub view: ViewOptions,
    pub no_cache: bool,
    pub cache_ttl: Duration,
    /// `chrono` format of timestamps in the API payload
    pub wire_time_format: String,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_timeout: Duration::from_secs(10),
            show_departures: false,
            show_arrivals: true,
            view: ViewOptions::default(),
            no_cache: false,
            cache_ttl: Duration::from_secs(60),
            wire_time_format: DEFAULT_WIRE_FORMAT.to_string(),
            verbose: false,
        }
    }
}

impl Config {
    /// Creates a Config from parsed CLI arguments.
    ///
    /// # Returns
    /// * `Ok(Config)` with appropriate settings
    /// * `Err(CliError)` if the URL is empty or the timeout is zero
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let api_url = cli.api_url.trim();
        if api_url.is_empty() {
            return Err(CliError::EmptyApiUrl);
        }
        if cli.api_timeout == 0 {
            return Err(CliError::ZeroTimeout);
        }

        // If we hide everything, show arrivals by default
        let show_arrivals = cli.arrivals || !cli.departures;

        Ok(Config {
            api_url: api_url.to_string(),
            api_timeout: Duration::from_secs(cli.api_timeout),
            show_departures: cli.departures,
            show_arrivals,
            view: ViewOptions {
                show_all_flights: cli.all,
                show_code_share: cli.code_shares,
            },
            no_cache: cli.no_cache,
            cache_ttl: Duration::from_secs(cli.cache_ttl),
            wire_time_format: DEFAULT_WIRE_FORMAT.to_string(),
            verbose: cli.verbose,
        })
    }
}

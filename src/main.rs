//! gvacli - Geneva airport arrivals and departures in the terminal
//!
//! Fetches the airport's flight boards (or reuses a cache younger than
//! `--cache-ttl`) and prints the requested boards as tables.

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, error};

use gvacli::cache::CacheManager;
use gvacli::cli::{Cli, Config};
use gvacli::data::{FlightCategory, FlightSource};
use gvacli::ui::BoardTable;
use gvacli::{logging, view};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(config.verbose);

    let mut cache = CacheManager::new(config.cache_ttl);
    if config.no_cache {
        cache = cache.disable();
    }

    let source = match FlightSource::new(&config, cache) {
        Ok(source) => source,
        Err(e) => {
            debug!(error = ?e, "unable to set up data source");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let flights = match source.acquire().await {
        Ok(flights) => flights,
        Err(e) => {
            debug!(error = ?e, "acquisition failed");
            eprintln!("Unable to fetch data from remote API: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut categories = Vec::new();
    if config.show_departures {
        categories.push(FlightCategory::Departure);
    }
    if config.show_arrivals {
        categories.push(FlightCategory::Arrival);
    }

    let mut stdout = io::stdout().lock();
    let styled = stdout.is_terminal();
    for category in categories {
        let rows = view::board_rows(category, flights.flights(category), &config.view);
        let table = BoardTable::new(category.title(), view::headers(category), rows);
        if let Err(e) = table.print(&mut stdout, styled) {
            // Broken pipe and friends: nothing more can be shown
            error!(error = %e, "unable to write table");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

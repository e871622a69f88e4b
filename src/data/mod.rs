//! Core data models for the Geneva airport flights CLI
//!
//! This module contains the flight record types and the data source that
//! fills them, either from the on-disk cache or from the remote API.

pub mod source;
pub mod status;
pub mod time;
pub mod wire;

pub use source::{FlightSource, SourceError};
pub use status::{FlightStatus, FlightType, StatusKind};
pub use time::{DelayClass, FlightTimestamp};

/// Which board a flight is listed on
///
/// Membership is positional: a flight is an arrival because it sits in
/// [`FlightCollection::arrivals`]. This enum only tells the view layer which
/// rules to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightCategory {
    Arrival,
    Departure,
}

impl FlightCategory {
    pub fn title(&self) -> &'static str {
        match self {
            FlightCategory::Arrival => "Arrivals",
            FlightCategory::Departure => "Departures",
        }
    }
}

/// A single flight as listed on the airport board
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flight {
    /// Operating flight number (e.g. "EZS1401")
    pub flight_identity: String,
    /// Flight number as shown on the public board
    pub displayed_flight_identity: String,
    /// Comma-separated marketing codes of the code-share partners
    pub displayed_master_flight_codes: String,
    /// Origin airport name for arrivals, destination name for departures
    pub airport: String,
    pub airport_city: String,
    /// IATA code of the origin airport
    pub airport_code: String,
    /// IATA code of the destination airport
    pub airport_code_destination: String,
    pub via_airport: String,
    pub origin_country: String,
    pub gate: String,
    /// Baggage belt
    pub carousel: String,
    pub terminal: String,
    pub checkin_desks: String,
    pub aircraft: String,
    pub aircraft_registration: String,
    /// Operating airline
    pub company: String,
    pub flight_type: FlightType,
    pub delay_minutes: i64,
    pub status: FlightStatus,

    pub scheduled_departure: FlightTimestamp,
    pub scheduled_arrival: FlightTimestamp,
    pub public_departure: FlightTimestamp,
    pub public_arrival: FlightTimestamp,
    /// Actual off-block time
    pub departure: FlightTimestamp,
    /// Actual on-block time
    pub arrival: FlightTimestamp,
    pub airborne: FlightTimestamp,
    /// Departure time of the inbound leg from the previous airport
    pub departure_from_previous_airport: FlightTimestamp,
    pub estimated_landing: FlightTimestamp,
    pub estimated_boarding: FlightTimestamp,
    pub next_public_advice: FlightTimestamp,
    pub last_update: FlightTimestamp,
}

impl Flight {
    /// The scheduled time used to order flights of the given category
    pub fn scheduled(&self, category: FlightCategory) -> FlightTimestamp {
        match category {
            FlightCategory::Arrival => self.scheduled_arrival,
            FlightCategory::Departure => self.scheduled_departure,
        }
    }
}

/// All flights from one acquisition cycle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightCollection {
    pub arrivals: Vec<Flight>,
    pub departures: Vec<Flight>,
}

impl FlightCollection {
    /// Flights of one category
    pub fn flights(&self, category: FlightCategory) -> &[Flight] {
        match category {
            FlightCategory::Arrival => &self.arrivals,
            FlightCategory::Departure => &self.departures,
        }
    }

    /// Sorts arrivals by scheduled arrival and departures by scheduled departure.
    ///
    /// The sort is stable and flights without a scheduled time come first.
    pub fn sort_by_scheduled(&mut self) {
        self.arrivals
            .sort_by_key(|f| f.scheduled(FlightCategory::Arrival));
        self.departures
            .sort_by_key(|f| f.scheduled(FlightCategory::Departure));
    }
}

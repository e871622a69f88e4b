//! Board view model: which flights are shown and how each becomes a table row
//!
//! Everything here is pure. The current day is passed in explicitly by the
//! `*_for_day` functions so the filters can be tested; [`board_rows`] uses the
//! local clock.

use chrono::{Datelike, Local};

use crate::cli::ViewOptions;
use crate::data::time::{LONG_DISPLAY_FORMAT, SHORT_DISPLAY_FORMAT};
use crate::data::{DelayClass, Flight, FlightCategory, FlightTimestamp, StatusKind};

// Length thresholds below are measured in UTF-8 bytes, like the code-share check

/// Minimum gate length for a departure to count as assigned
const MIN_GATE_LEN: usize = 2;

/// Status labels shorter than this count as "no status yet" on arrivals
const MIN_STATUS_LEN: usize = 10;

/// Column headers of the departures board
pub const DEPARTURE_HEADERS: [&str; 9] = [
    "Scheduled",
    "Expected",
    "Destination",
    "Flight",
    "Airline",
    "Gate",
    "Aircraft",
    "Registration",
    "Status",
];

/// Column headers of the arrivals board
pub const ARRIVAL_HEADERS: [&str; 10] = [
    "Scheduled",
    "Expected",
    "Departed",
    "Origin",
    "Flight",
    "Airline",
    "Belt",
    "Aircraft",
    "Registration",
    "Status",
];

/// How a cell should stand out when rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Plain,
    /// An expected time, coloured by how late it is
    Delay(DelayClass),
    /// A status label
    Status(StatusKind),
}

/// One rendered table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCell {
    pub text: String,
    pub emphasis: Emphasis,
}

impl DisplayCell {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Emphasis::Plain,
        }
    }

    pub fn emphasized(text: impl Into<String>, emphasis: Emphasis) -> Self {
        Self {
            text: text.into(),
            emphasis,
        }
    }
}

pub type Row = Vec<DisplayCell>;

pub fn headers(category: FlightCategory) -> &'static [&'static str] {
    match category {
        FlightCategory::Arrival => &ARRIVAL_HEADERS,
        FlightCategory::Departure => &DEPARTURE_HEADERS,
    }
}

/// Flight number as shown on the board, with code shares if requested
///
/// Departures list their codes when the code string is longer than one
/// character, arrivals as soon as it is non-empty.
pub fn display_identity(flight: &Flight, category: FlightCategory, show_code_share: bool) -> String {
    let min_codes_len = match category {
        FlightCategory::Departure => 2,
        FlightCategory::Arrival => 1,
    };
    if show_code_share && flight.displayed_master_flight_codes.len() >= min_codes_len {
        format!(
            "{} ({})",
            flight.flight_identity, flight.displayed_master_flight_codes
        )
    } else {
        flight.flight_identity.clone()
    }
}

/// Only compares the day of the month: the 22nd of any month counts as "today"
/// on the 22nd
fn is_on_day(ts: &FlightTimestamp, today: u32) -> bool {
    ts.day() == Some(today)
}

/// Whether a departure is listed on the board for day-of-month `today`
pub fn include_departure(flight: &Flight, options: &ViewOptions, today: u32) -> bool {
    if options.show_all_flights {
        return true;
    }
    // Only show flights assigned to a gate
    if flight.gate.len() < MIN_GATE_LEN {
        return false;
    }
    is_on_day(&flight.scheduled_departure, today)
}

/// Whether an arrival is listed on the board for day-of-month `today`
pub fn include_arrival(flight: &Flight, options: &ViewOptions, today: u32) -> bool {
    if options.show_all_flights {
        return true;
    }
    // Hide flights neither expected nor carrying a meaningful status
    if flight.public_arrival.is_absent() && flight.status.label().len() < MIN_STATUS_LEN {
        return false;
    }
    is_on_day(&flight.scheduled_arrival, today)
}

fn time_format(options: &ViewOptions) -> &'static str {
    if options.show_all_flights {
        LONG_DISPLAY_FORMAT
    } else {
        SHORT_DISPLAY_FORMAT
    }
}

fn delayed_cell(actual: &FlightTimestamp, scheduled: &FlightTimestamp, format: &str) -> DisplayCell {
    DisplayCell::emphasized(
        actual.format(format),
        Emphasis::Delay(actual.delay_class(scheduled)),
    )
}

fn status_cell(flight: &Flight) -> DisplayCell {
    DisplayCell::emphasized(flight.status.label(), Emphasis::Status(flight.status.kind()))
}

/// Projects a departure into its table row
pub fn departure_row(flight: &Flight, options: &ViewOptions) -> Row {
    let format = time_format(options);
    vec![
        DisplayCell::plain(flight.scheduled_departure.format(format)),
        delayed_cell(&flight.public_departure, &flight.scheduled_departure, format),
        DisplayCell::plain(format!(
            "{} ({})",
            flight.airport, flight.airport_code_destination
        )),
        DisplayCell::plain(display_identity(
            flight,
            FlightCategory::Departure,
            options.show_code_share,
        )),
        DisplayCell::plain(&flight.company),
        DisplayCell::plain(&flight.gate),
        DisplayCell::plain(&flight.aircraft),
        DisplayCell::plain(&flight.aircraft_registration),
        status_cell(flight),
    ]
}

/// Projects an arrival into its table row
pub fn arrival_row(flight: &Flight, options: &ViewOptions) -> Row {
    let format = time_format(options);
    vec![
        DisplayCell::plain(flight.scheduled_arrival.format(format)),
        delayed_cell(&flight.public_arrival, &flight.scheduled_arrival, format),
        DisplayCell::plain(flight.departure_from_previous_airport.format(format)),
        DisplayCell::plain(format!("{} ({})", flight.airport, flight.airport_code)),
        DisplayCell::plain(display_identity(
            flight,
            FlightCategory::Arrival,
            options.show_code_share,
        )),
        DisplayCell::plain(&flight.company),
        DisplayCell::plain(&flight.carousel),
        DisplayCell::plain(&flight.aircraft),
        DisplayCell::plain(&flight.aircraft_registration),
        status_cell(flight),
    ]
}

/// Filters and projects one board for day-of-month `today`
pub fn board_rows_for_day(
    category: FlightCategory,
    flights: &[Flight],
    options: &ViewOptions,
    today: u32,
) -> Vec<Row> {
    match category {
        FlightCategory::Departure => flights
            .iter()
            .filter(|f| include_departure(f, options, today))
            .map(|f| departure_row(f, options))
            .collect(),
        FlightCategory::Arrival => flights
            .iter()
            .filter(|f| include_arrival(f, options, today))
            .map(|f| arrival_row(f, options))
            .collect(),
    }
}

/// Filters and projects one board for the current local day
pub fn board_rows(category: FlightCategory, flights: &[Flight], options: &ViewOptions) -> Vec<Row> {
    board_rows_for_day(category, flights, options, Local::now().day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FlightStatus;
    use chrono::{Duration, NaiveDate};

    const TODAY: u32 = 22;

    fn ts(day: u32, h: u32, m: u32) -> FlightTimestamp {
        NaiveDate::from_ymd_opt(2024, 11, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
            .into()
    }

    fn filtered() -> ViewOptions {
        ViewOptions {
            show_all_flights: false,
            show_code_share: false,
        }
    }

    fn departure(gate: &str, scheduled: FlightTimestamp) -> Flight {
        Flight {
            flight_identity: "EZ123".into(),
            displayed_master_flight_codes: "EZ123,EZ456".into(),
            airport: "Paris CDG".into(),
            airport_code_destination: "CDG".into(),
            company: "easyJet".into(),
            gate: gate.into(),
            aircraft: "A320".into(),
            aircraft_registration: "HB-JXA".into(),
            status: FlightStatus::parse(Some("Boarding")),
            scheduled_departure: scheduled,
            ..Default::default()
        }
    }

    fn texts(row: &Row) -> Vec<&str> {
        row.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn test_departure_identity_with_and_without_code_share() {
        let flight = departure("A12", ts(TODAY, 7, 0));
        assert_eq!(
            display_identity(&flight, FlightCategory::Departure, true),
            "EZ123 (EZ123,EZ456)"
        );
        assert_eq!(
            display_identity(&flight, FlightCategory::Departure, false),
            "EZ123"
        );
    }

    #[test]
    fn test_identity_code_length_asymmetry() {
        let flight = Flight {
            flight_identity: "LX1".into(),
            displayed_master_flight_codes: "X".into(),
            ..Default::default()
        };
        assert_eq!(display_identity(&flight, FlightCategory::Departure, true), "LX1");
        assert_eq!(display_identity(&flight, FlightCategory::Arrival, true), "LX1 (X)");

        let no_codes = Flight {
            flight_identity: "LX1".into(),
            ..Default::default()
        };
        assert_eq!(display_identity(&no_codes, FlightCategory::Arrival, true), "LX1");
    }

    #[test]
    fn test_departure_without_gate_excluded_unless_show_all() {
        let flight = departure("", ts(TODAY, 7, 0));
        assert!(!include_departure(&flight, &filtered(), TODAY));

        let show_all = ViewOptions {
            show_all_flights: true,
            ..filtered()
        };
        assert!(include_departure(&flight, &show_all, TODAY));
    }

    #[test]
    fn test_departure_single_char_gate_excluded() {
        let flight = departure("A", ts(TODAY, 7, 0));
        assert!(!include_departure(&flight, &filtered(), TODAY));
    }

    #[test]
    fn test_gate_and_code_lengths_count_bytes() {
        // a single two-byte character passes both the gate and code-share checks
        let mut flight = departure("É", ts(TODAY, 7, 0));
        assert!(include_departure(&flight, &filtered(), TODAY));

        flight.displayed_master_flight_codes = "É".into();
        assert_eq!(
            display_identity(&flight, FlightCategory::Departure, true),
            "EZ123 (É)"
        );
    }

    #[test]
    fn test_departure_other_day_excluded() {
        assert!(!include_departure(&departure("A12", ts(TODAY - 1, 23, 0)), &filtered(), TODAY));
        assert!(!include_departure(&departure("A12", FlightTimestamp::absent()), &filtered(), TODAY));
    }

    #[test]
    fn test_same_day_of_other_month_counts_as_today() {
        let other_month: FlightTimestamp = NaiveDate::from_ymd_opt(2024, 10, TODAY)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap()
            .into();
        assert!(include_departure(&departure("A12", other_month), &filtered(), TODAY));
    }

    #[test]
    fn test_arrival_without_public_time_needs_long_status() {
        let mut flight = Flight {
            scheduled_arrival: ts(TODAY, 9, 0),
            status: FlightStatus::parse(Some("Arrived")),
            ..Default::default()
        };
        assert!(!include_arrival(&flight, &filtered(), TODAY));

        flight.status = FlightStatus::parse(Some("Diverted to Zurich"));
        assert!(include_arrival(&flight, &filtered(), TODAY));

        flight.status = FlightStatus::default();
        flight.public_arrival = ts(TODAY, 9, 10);
        assert!(include_arrival(&flight, &filtered(), TODAY));
    }

    #[test]
    fn test_arrival_other_day_excluded() {
        let flight = Flight {
            scheduled_arrival: ts(TODAY + 1, 9, 0),
            public_arrival: ts(TODAY + 1, 9, 0),
            ..Default::default()
        };
        assert!(!include_arrival(&flight, &filtered(), TODAY));
        assert!(include_arrival(
            &flight,
            &ViewOptions {
                show_all_flights: true,
                ..filtered()
            },
            TODAY
        ));
    }

    #[test]
    fn test_departure_row_columns() {
        let mut flight = departure("A12", ts(TODAY, 7, 0));
        flight.public_departure = ts(TODAY, 7, 45);

        let row = departure_row(&flight, &filtered());

        assert_eq!(
            texts(&row),
            [
                "07:00",
                "07:45",
                "Paris CDG (CDG)",
                "EZ123",
                "easyJet",
                "A12",
                "A320",
                "HB-JXA",
                "Boarding"
            ]
        );
        assert_eq!(row[1].emphasis, Emphasis::Delay(DelayClass::Moderate));
        assert_eq!(row[8].emphasis, Emphasis::Status(StatusKind::Boarding));
        assert_eq!(row.len(), DEPARTURE_HEADERS.len());
    }

    #[test]
    fn test_arrival_row_columns_long_format() {
        let scheduled = ts(TODAY, 9, 0);
        let flight = Flight {
            flight_identity: "LX359".into(),
            airport: "London Heathrow".into(),
            airport_code: "LHR".into(),
            company: "Swiss".into(),
            carousel: "3".into(),
            status: FlightStatus::parse(Some("Next Info")),
            scheduled_arrival: scheduled,
            public_arrival: FlightTimestamp::new(scheduled.instant().unwrap() + Duration::minutes(75)),
            departure_from_previous_airport: ts(TODAY, 7, 5),
            ..Default::default()
        };
        let options = ViewOptions {
            show_all_flights: true,
            show_code_share: true,
        };

        let row = arrival_row(&flight, &options);

        assert_eq!(
            texts(&row),
            [
                "22-11-2024 09:00",
                "22-11-2024 10:15",
                "22-11-2024 07:05",
                "London Heathrow (LHR)",
                "LX359",
                "Swiss",
                "3",
                "",
                "",
                "Delayed"
            ]
        );
        assert_eq!(row[1].emphasis, Emphasis::Delay(DelayClass::Severe));
        assert_eq!(row[9].emphasis, Emphasis::Status(StatusKind::NextInfo));
        assert_eq!(row.len(), ARRIVAL_HEADERS.len());
    }

    #[test]
    fn test_missing_expected_time_is_empty_and_on_time() {
        let flight = departure("A12", ts(TODAY, 7, 0));
        let row = departure_row(&flight, &filtered());
        assert_eq!(row[1].text, "");
        assert_eq!(row[1].emphasis, Emphasis::Delay(DelayClass::OnTime));
    }

    #[test]
    fn test_three_departures_only_todays_gated_one_shown() {
        let flights = vec![
            departure("", ts(TODAY, 6, 0)),
            departure("B4", ts(TODAY, 8, 0)),
            departure("C7", ts(TODAY - 1, 8, 0)),
        ];

        let rows = board_rows_for_day(FlightCategory::Departure, &flights, &filtered(), TODAY);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][5].text, "B4");
    }

    #[test]
    fn test_projection_is_idempotent() {
        let flights = vec![
            departure("A12", ts(TODAY, 6, 0)),
            departure("B4", ts(TODAY, 8, 0)),
        ];
        let options = ViewOptions {
            show_all_flights: false,
            show_code_share: true,
        };

        let first = board_rows_for_day(FlightCategory::Departure, &flights, &options, TODAY);
        let second = board_rows_for_day(FlightCategory::Departure, &flights, &options, TODAY);

        assert_eq!(first, second);
        assert_eq!(first[0][3].text, "EZ123 (EZ123,EZ456)");
    }

    #[test]
    fn test_headers_per_category() {
        assert_eq!(headers(FlightCategory::Departure)[5], "Gate");
        assert_eq!(headers(FlightCategory::Arrival)[6], "Belt");
    }
}

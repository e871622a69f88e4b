//! Timestamp values carried by flight records
//!
//! The API sends every instant as a local wall-clock string with no zone
//! information, so timestamps are kept as `NaiveDateTime`. An absent value
//! (JSON `null`, the literal `"null"` token, an empty string, or text that does
//! not match the wire format) is represented by `FlightTimestamp::absent()`.

use chrono::{Datelike, Duration, NaiveDateTime};
use tracing::debug;

/// Wire format used by the flights API (e.g. `22.11.2024 06:05:00`)
pub const DEFAULT_WIRE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

/// Display format for today-only views
pub const SHORT_DISPLAY_FORMAT: &str = "%H:%M";

/// Display format when every flight is listed regardless of day
pub const LONG_DISPLAY_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Delay above which a time is shown as moderately late (minutes)
pub const MODERATE_DELAY_MINUTES: i64 = 30;

/// Delay above which a time is shown as severely late (minutes)
pub const SEVERE_DELAY_MINUTES: i64 = 60;

/// An optional point in time parsed from the flights API
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FlightTimestamp(Option<NaiveDateTime>);

/// How late an actual time is compared to its scheduled counterpart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayClass {
    /// Late by no more than 30 minutes, early, or not comparable
    OnTime,
    /// Late by more than 30 minutes
    Moderate,
    /// Late by more than 60 minutes
    Severe,
}

impl FlightTimestamp {
    /// The zero value: no instant known
    pub const fn absent() -> Self {
        Self(None)
    }

    pub const fn new(instant: NaiveDateTime) -> Self {
        Self(Some(instant))
    }

    /// Parses a raw wire value with the given `chrono` format string.
    ///
    /// `None`, `""` and `"null"` give an absent timestamp. Values that do not
    /// match `format` are also treated as absent rather than failing the
    /// whole payload.
    pub fn parse(raw: Option<&str>, format: &str) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return Self::absent();
        };
        if raw.is_empty() || raw == "null" {
            return Self::absent();
        }

        match NaiveDateTime::parse_from_str(raw, format) {
            Ok(instant) => Self::new(instant),
            Err(e) => {
                debug!(value = raw, error = %e, "unparseable timestamp, leaving absent");
                Self::absent()
            }
        }
    }

    pub fn instant(&self) -> Option<NaiveDateTime> {
        self.0
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    /// Day of the month, or `None` when absent
    pub fn day(&self) -> Option<u32> {
        self.0.map(|t| t.day())
    }

    /// Renders with `format`, or an empty string when absent
    pub fn format(&self, format: &str) -> String {
        match self.0 {
            Some(t) => t.format(format).to_string(),
            None => String::new(),
        }
    }

    /// Time between `scheduled` and this timestamp, if both are present
    pub fn delay(&self, scheduled: &FlightTimestamp) -> Option<Duration> {
        match (self.0, scheduled.0) {
            (Some(actual), Some(planned)) => Some(actual - planned),
            _ => None,
        }
    }

    /// Classifies this timestamp as a (possibly late) version of `scheduled`
    ///
    /// Thresholds are strict and compared to the second: 60m30s late is severe.
    pub fn delay_class(&self, scheduled: &FlightTimestamp) -> DelayClass {
        match self.delay(scheduled).map(|d| d.num_seconds()) {
            Some(secs) if secs > SEVERE_DELAY_MINUTES * 60 => DelayClass::Severe,
            Some(secs) if secs > MODERATE_DELAY_MINUTES * 60 => DelayClass::Moderate,
            _ => DelayClass::OnTime,
        }
    }
}

impl From<NaiveDateTime> for FlightTimestamp {
    fn from(instant: NaiveDateTime) -> Self {
        Self::new(instant)
    }
}

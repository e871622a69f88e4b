//! Wire format of the flights API and its decoding into flight records
//!
//! The payload is first deserialized into loosely-typed `Wire*` structs whose
//! fields hold the raw JSON scalars. [`decode_payload`] then turns those into
//! [`FlightCollection`] in one explicit step, which is the only place where
//! status and timestamp tokens are interpreted.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::{Flight, FlightCollection, FlightStatus, FlightTimestamp, FlightType};

/// Top-level response body
#[derive(Debug, Deserialize)]
pub struct WirePayload {
    /// Required key; an explicit `null` means no flights
    #[serde(deserialize_with = "null_as_default")]
    pub flights: WireFlights,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireFlights {
    #[serde(default, deserialize_with = "null_as_default")]
    pub arrivals: Vec<WireFlight>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub departures: Vec<WireFlight>,
}

/// One element of `flights.arrivals` or `flights.departures`
///
/// Every field is optional; scalars are accepted as strings or numbers.
#[derive(Debug, Default, Deserialize)]
pub struct WireFlight {
    #[serde(default, deserialize_with = "scalar")]
    pub flight_identity: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub displayed_flight_identity: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub displayed_master_flight_codes: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub airport: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub airport_city: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub airport_code: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub airport_code_destination: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub via_airport: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub origin_country: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub gate: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub carousel: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub terminal: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub checkin_desks: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub aircraft: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub aircraft_registration: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub flight_type: Option<String>,
    /// Spelled `delay_minuts` by the API
    #[serde(default, rename = "delay_minuts", deserialize_with = "scalar")]
    pub delay_minutes: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub flight_status: Option<String>,

    #[serde(default, deserialize_with = "scalar")]
    pub scheduled_departure: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub scheduled_arrival: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub public_departure: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub public_arrival: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub departure: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub arrival: Option<String>,
    /// Spelled `airborn` by the API
    #[serde(default, rename = "airborn", deserialize_with = "scalar")]
    pub airborne: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub departure_from_previous_airport: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub estimated_landing: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub estimated_boarding: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub next_public_advice: Option<String>,
    #[serde(default, deserialize_with = "scalar")]
    pub last_update: Option<String>,
}

/// Treats a JSON `null` like an empty value
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accepts a JSON string, number or bool as text; `null` and anything
/// structured become `None`.
fn scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Plain text field; the `"null"` token counts as missing
fn text(raw: Option<String>) -> String {
    match raw {
        Some(s) if s != "null" => s,
        _ => String::new(),
    }
}

impl WireFlight {
    /// Decodes this element, parsing timestamps with `time_format`
    pub fn decode(self, time_format: &str) -> Flight {
        let ts = |raw: &Option<String>| FlightTimestamp::parse(raw.as_deref(), time_format);

        Flight {
            scheduled_departure: ts(&self.scheduled_departure),
            scheduled_arrival: ts(&self.scheduled_arrival),
            public_departure: ts(&self.public_departure),
            public_arrival: ts(&self.public_arrival),
            departure: ts(&self.departure),
            arrival: ts(&self.arrival),
            airborne: ts(&self.airborne),
            departure_from_previous_airport: ts(&self.departure_from_previous_airport),
            estimated_landing: ts(&self.estimated_landing),
            estimated_boarding: ts(&self.estimated_boarding),
            next_public_advice: ts(&self.next_public_advice),
            last_update: ts(&self.last_update),

            status: FlightStatus::parse(self.flight_status.as_deref()),
            flight_type: FlightType::parse(self.flight_type.as_deref()),
            delay_minutes: self
                .delay_minutes
                .as_deref()
                .and_then(|s| s.trim().parse().ok())
                .unwrap_or(0),

            flight_identity: text(self.flight_identity),
            displayed_flight_identity: text(self.displayed_flight_identity),
            displayed_master_flight_codes: text(self.displayed_master_flight_codes),
            airport: text(self.airport),
            airport_city: text(self.airport_city),
            airport_code: text(self.airport_code),
            airport_code_destination: text(self.airport_code_destination),
            via_airport: text(self.via_airport),
            origin_country: text(self.origin_country),
            gate: text(self.gate),
            carousel: text(self.carousel),
            terminal: text(self.terminal),
            checkin_desks: text(self.checkin_desks),
            aircraft: text(self.aircraft),
            aircraft_registration: text(self.aircraft_registration),
            company: text(self.company),
        }
    }
}

/// Parses a raw response body into an unsorted [`FlightCollection`]
pub fn decode_payload(body: &[u8], time_format: &str) -> Result<FlightCollection, serde_json::Error> {
    let payload: WirePayload = serde_json::from_slice(body)?;

    Ok(FlightCollection {
        arrivals: payload
            .flights
            .arrivals
            .into_iter()
            .map(|f| f.decode(time_format))
            .collect(),
        departures: payload
            .flights
            .departures
            .into_iter()
            .map(|f| f.decode(time_format))
            .collect(),
    })
}

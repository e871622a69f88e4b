//! Flight status and flight type tokens

/// Raw status token as sent by the API ("Boarding", "Delayed", ...)
///
/// The token is kept verbatim; display mapping happens in [`FlightStatus::label`]
/// and [`FlightStatus::kind`] without touching it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlightStatus(String);

/// Known status categories, each shown with its own emphasis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Boarding,
    GoToGate,
    Arrived,
    Departed,
    Delayed,
    NextInfo,
    Cancelled,
    /// Any other token, including the empty one
    Other,
}

impl FlightStatus {
    /// Builds a status from a wire value; `None` and `"null"` give an empty token
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("null") => Self::default(),
            Some(s) => Self(s.to_string()),
        }
    }

    /// The untouched token
    pub fn token(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn kind(&self) -> StatusKind {
        match self.0.as_str() {
            "Boarding" => StatusKind::Boarding,
            "Go to gate" => StatusKind::GoToGate,
            "Arrived" => StatusKind::Arrived,
            "Departed" => StatusKind::Departed,
            "Delayed" => StatusKind::Delayed,
            "Next Info" => StatusKind::NextInfo,
            "Cancelled" => StatusKind::Cancelled,
            _ => StatusKind::Other,
        }
    }

    /// Text shown to the user. "Next Info" is displayed as "Delayed".
    pub fn label(&self) -> &str {
        match self.kind() {
            StatusKind::NextInfo => "Delayed",
            _ => &self.0,
        }
    }
}

/// Border-control category of a flight
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlightType {
    Schengen,
    International,
    France,
    Other,
    #[default]
    Unknown,
}

impl FlightType {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("S") => FlightType::Schengen,
            Some("I") => FlightType::International,
            Some("F") => FlightType::France,
            Some("O") => FlightType::Other,
            _ => FlightType::Unknown,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FlightType::Schengen => "Schengen",
            FlightType::International => "International",
            FlightType::France => "France",
            FlightType::Other => "Other",
            FlightType::Unknown => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_token_is_empty() {
        assert!(FlightStatus::parse(Some("null")).is_empty());
        assert!(FlightStatus::parse(None).is_empty());
        assert_eq!(FlightStatus::parse(Some("null")).label(), "");
    }

    #[test]
    fn test_known_tokens_map_to_kinds() {
        assert_eq!(FlightStatus::parse(Some("Boarding")).kind(), StatusKind::Boarding);
        assert_eq!(FlightStatus::parse(Some("Go to gate")).kind(), StatusKind::GoToGate);
        assert_eq!(FlightStatus::parse(Some("Arrived")).kind(), StatusKind::Arrived);
        assert_eq!(FlightStatus::parse(Some("Departed")).kind(), StatusKind::Departed);
        assert_eq!(FlightStatus::parse(Some("Delayed")).kind(), StatusKind::Delayed);
        assert_eq!(FlightStatus::parse(Some("Cancelled")).kind(), StatusKind::Cancelled);
        assert_eq!(FlightStatus::parse(Some("Landed")).kind(), StatusKind::Other);
    }

    #[test]
    fn test_next_info_label_keeps_token() {
        let status = FlightStatus::parse(Some("Next Info"));
        assert_eq!(status.kind(), StatusKind::NextInfo);
        assert_eq!(status.label(), "Delayed");
        assert_eq!(status.token(), "Next Info");
    }

    #[test]
    fn test_flight_type_parse() {
        assert_eq!(FlightType::parse(Some("S")), FlightType::Schengen);
        assert_eq!(FlightType::parse(Some("I")), FlightType::International);
        assert_eq!(FlightType::parse(Some("F")), FlightType::France);
        assert_eq!(FlightType::parse(Some("O")), FlightType::Other);
        assert_eq!(FlightType::parse(Some("null")), FlightType::Unknown);
        assert_eq!(FlightType::parse(None).name(), "Unknown");
    }
}

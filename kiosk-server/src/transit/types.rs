//! SL Transport departures feed shapes.
//!
//! The feed is already the shape the kiosk renders, so these types are
//! both the wire format and the domain model: everything passes through
//! untouched, notably `display`, which is the human text SL computed for
//! the board. Both serde directions derive so the feed can be validated
//! on the way in and re-served on the way out.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Response from `/v1/sites/{site_id}/departures`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeparturesResponse {
    /// Departures from the site, soonest first as SL sends them.
    pub departures: Vec<Departure>,

    /// Deviations describing the stop as a whole rather than any single
    /// departure.
    pub stop_deviations: Vec<Deviation>,
}

/// One departure from the site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Departure {
    /// Final stop of the journey.
    pub destination: String,

    /// Which of the two platform directions this departure leaves in,
    /// 1 or 2.
    pub direction_code: u8,

    /// Human-readable direction label.
    pub direction: String,

    /// Tracking state; "EXPECTED" means realtime-tracked, anything else
    /// is schedule-only.
    pub state: String,

    /// Display text for the board ("2 min", "10:05"). Used verbatim,
    /// never reformatted.
    pub display: String,

    /// Scheduled departure, local wall-clock ISO timestamp.
    pub scheduled: String,

    /// Expected departure, local wall-clock ISO timestamp.
    pub expected: String,

    pub journey: Journey,
    pub stop_area: StopArea,
    pub stop_point: StopPoint,
    pub line: Line,

    /// Deviations attached to this specific departure.
    pub deviations: Vec<Deviation>,
}

impl Departure {
    /// Whether this departure is realtime-tracked rather than
    /// schedule-only.
    pub fn is_realtime(&self) -> bool {
        self.state == "EXPECTED"
    }

    /// The parsed `expected` timestamp, if parseable.
    ///
    /// SL sends zoneless local timestamps ("2024-03-15T10:06:30"); an
    /// offset-carrying form is accepted as a fallback.
    pub fn expected_time(&self) -> Option<NaiveDateTime> {
        parse_feed_timestamp(&self.expected)
    }
}

/// Journey identifiers of a departure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journey {
    pub id: i64,
    pub state: String,

    /// Prediction quality, when SL provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prediction_state: Option<String>,
}

/// The stop area (station) a departure leaves from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopArea {
    pub id: i64,
    pub name: String,

    /// Area kind, e.g. "METROSTN".
    #[serde(rename = "type")]
    pub area_type: String,
}

/// The specific stop point (platform) a departure leaves from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StopPoint {
    pub id: i64,
    pub name: String,

    /// Platform or bay designation, when signed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
}

/// The line a departure runs on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub id: i64,

    /// Line designation as shown on the vehicle ("13", "17A").
    pub designation: String,

    /// Feed token for the mode, usually uppercase ("METRO").
    pub transport_mode: String,

    pub group_of_lines: String,
}

/// A disruption annotation, attached to a departure or to the stop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deviation {
    /// Severity; higher is more important.
    pub importance_level: i32,

    /// "CANCELLED", "DELAYED", "INFORMATION" or another token.
    pub consequence: String,

    /// Free-text message.
    pub message: String,
}

/// Canonical transport modes of the SL network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Metro,
    Bus,
    Train,
    Tram,
    Ship,
    Other,
}

/// Error from parsing a transport mode token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transport mode: {0}")]
pub struct InvalidTransportMode(pub String);

impl TransportMode {
    /// Parse a mode token, case-insensitively.
    pub fn parse(s: &str) -> Result<Self, InvalidTransportMode> {
        match s.to_ascii_uppercase().as_str() {
            "METRO" => Ok(TransportMode::Metro),
            "BUS" => Ok(TransportMode::Bus),
            "TRAIN" => Ok(TransportMode::Train),
            "TRAM" => Ok(TransportMode::Tram),
            "SHIP" => Ok(TransportMode::Ship),
            "OTHER" => Ok(TransportMode::Other),
            _ => Err(InvalidTransportMode(s.to_string())),
        }
    }

    /// The feed's uppercase token for this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            TransportMode::Metro => "METRO",
            TransportMode::Bus => "BUS",
            TransportMode::Train => "TRAIN",
            TransportMode::Tram => "TRAM",
            TransportMode::Ship => "SHIP",
            TransportMode::Other => "OTHER",
        }
    }
}

/// Parse a feed timestamp: zoneless local first, RFC 3339 as fallback.
pub(crate) fn parse_feed_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.naive_local())
        })
}

//! Report kinds and the per-kind field records extracted from request data

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::Display;

/// Placeholder used when a report has no station identifier
pub const UNKNOWN_STATION: &str = "unknown station";
/// Placeholder used when a pilot report has no location
pub const UNKNOWN_LOCATION: &str = "unknown location";
/// Placeholder used when a report has no raw text
pub const NO_RAW_DATA: &str = "No raw data available";

/// Flat field mapping as received from callers
pub type ReportData = Map<String, Value>;

/// Kind of aviation weather product being summarized
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ReportKind {
    Metar,
    Taf,
    Pirep,
    Sigmet,
    /// Anything else, kept verbatim
    Other(String),
}

impl ReportKind {
    /// Parse a kind name. Only the exact lowercase names select a dedicated
    /// template; anything else becomes [`ReportKind::Other`].
    #[must_use]
    pub fn parse(kind: &str) -> Self {
        match kind {
            "metar" => Self::Metar,
            "taf" => Self::Taf,
            "pirep" => Self::Pirep,
            "sigmet" => Self::Sigmet,
            _ => Self::Other(kind.to_string()),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Metar => "metar",
            Self::Taf => "taf",
            Self::Pirep => "pirep",
            Self::Sigmet => "sigmet",
            Self::Other(kind) => kind,
        }
    }
}

impl From<&str> for ReportKind {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for ReportKind {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<ReportKind> for String {
    fn from(value: ReportKind) -> Self {
        value.as_str().to_string()
    }
}

impl Display for ReportKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

/// Fields consumed from METAR and TAF data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StationReport {
    /// ICAO station identifier
    pub station: Option<String>,
    /// Undecoded report text
    pub raw_text: Option<String>,
}

impl StationReport {
    #[must_use]
    pub fn station_or_placeholder(&self) -> &str {
        self.station.as_deref().unwrap_or(UNKNOWN_STATION)
    }

    #[must_use]
    pub fn raw_text_or_placeholder(&self) -> &str {
        self.raw_text.as_deref().unwrap_or(NO_RAW_DATA)
    }
}

/// Fields consumed from pilot report data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PirepReport {
    /// Reported position, only used in the fallback text
    pub location: Option<String>,
    /// Undecoded report text
    pub raw_text: Option<String>,
}

impl PirepReport {
    #[must_use]
    pub fn location_or_placeholder(&self) -> &str {
        self.location.as_deref().unwrap_or(UNKNOWN_LOCATION)
    }

    #[must_use]
    pub fn raw_text_or_placeholder(&self) -> &str {
        self.raw_text.as_deref().unwrap_or(NO_RAW_DATA)
    }
}

/// Fields consumed from SIGMET data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SigmetReport {
    /// Undecoded advisory text
    pub raw_text: Option<String>,
}

impl SigmetReport {
    #[must_use]
    pub fn raw_text_or_placeholder(&self) -> &str {
        self.raw_text.as_deref().unwrap_or(NO_RAW_DATA)
    }
}

/// A report validated into the record its kind needs
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Metar(StationReport),
    Taf(StationReport),
    Pirep(PirepReport),
    Sigmet(SigmetReport),
    /// Unrecognized kind; the whole mapping is kept for the generic prompt
    Other { kind: String, data: ReportData },
}

impl Report {
    /// Build a report from a kind name and an open field mapping.
    ///
    /// Fields a kind does not use are ignored. Missing or non-scalar
    /// fields are left empty so templates substitute placeholders.
    #[must_use]
    pub fn from_parts(kind: &str, data: &ReportData) -> Self {
        match ReportKind::parse(kind) {
            ReportKind::Metar => Self::Metar(station_report(data)),
            ReportKind::Taf => Self::Taf(station_report(data)),
            ReportKind::Pirep => Self::Pirep(PirepReport {
                location: text_field(data, "location"),
                raw_text: text_field(data, "raw_text"),
            }),
            ReportKind::Sigmet => Self::Sigmet(SigmetReport {
                raw_text: text_field(data, "raw_text"),
            }),
            ReportKind::Other(kind) => Self::Other {
                kind,
                data: data.clone(),
            },
        }
    }

    #[must_use]
    pub fn kind(&self) -> ReportKind {
        match self {
            Self::Metar(_) => ReportKind::Metar,
            Self::Taf(_) => ReportKind::Taf,
            Self::Pirep(_) => ReportKind::Pirep,
            Self::Sigmet(_) => ReportKind::Sigmet,
            Self::Other { kind, .. } => ReportKind::Other(kind.clone()),
        }
    }
}

fn station_report(data: &ReportData) -> StationReport {
    StationReport {
        station: text_field(data, "station"),
        raw_text: text_field(data, "raw_text"),
    }
}

/// Scalar JSON values as text; null, arrays and objects count as missing.
fn text_field(data: &ReportData, key: &str) -> Option<String> {
    match data.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

//! Domain models for weather report summaries

pub mod report;

pub use report::{
    NO_RAW_DATA, PirepReport, Report, ReportData, ReportKind, SigmetReport, StationReport,
    UNKNOWN_LOCATION, UNKNOWN_STATION,
};

//! Canned summaries used when the completion backend fails

use crate::models::Report;

/// Three short paragraphs naming the report and pointing at its raw text.
/// Performs no I/O and cannot fail.
#[must_use]
pub fn fallback_summary(report: &Report) -> String {
    match report {
        Report::Metar(fields) => format!(
            "METAR for {}.\n\n\
             This is automated weather data. Check the raw report for details.\n\n\
             Exercise caution and verify conditions before flight.",
            fields.station_or_placeholder()
        ),
        Report::Taf(fields) => format!(
            "TAF forecast for {}.\n\n\
             Consult the raw forecast for detailed weather predictions.\n\n\
             Plan your flight carefully considering all available information.",
            fields.station_or_placeholder()
        ),
        Report::Pirep(fields) => format!(
            "Pilot report near {}.\n\n\
             Review the raw report for specific conditions reported.\n\n\
             Consider these pilot observations in your flight planning.",
            fields.location_or_placeholder()
        ),
        // SIGMET has a dedicated prompt but shares the generic fallback
        Report::Sigmet(_) | Report::Other { .. } => GENERIC_FALLBACK.to_string(),
    }
}

/// Fallback for report kinds without a dedicated template
pub const GENERIC_FALLBACK: &str = "Weather information available.\n\n\
     Refer to the raw data for complete details.\n\n\
     Ensure thorough preflight planning.";

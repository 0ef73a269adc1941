//! Prompt templates for each report kind

use serde_json::Value;

use crate::models::{Report, ReportKind};

/// Persona shared by every system instruction
pub const PERSONA_PREAMBLE: &str = "You are an expert aviation weather briefing assistant providing detailed, accurate summaries for pilots. Your summaries should be comprehensive yet clear, focusing on operational impact and flight safety. ";

const METAR_FOCUS: &str = "Analyze and summarize the METAR in plain language with a focus on flight safety. Provide a detailed assessment of ceiling, visibility, winds, pressure, and significant weather phenomena. Include implications for VFR/IFR operations and mention any concerning trends if apparent.";

const TAF_FOCUS: &str = "Analyze the TAF forecast in detail, highlighting all operationally significant changes in weather conditions over the forecast period. Break down the forecast into clear time segments, focusing on changing IFR/VFR conditions, wind shifts, and hazardous weather. Include practical recommendations for flight planning.";

const PIREP_FOCUS: &str = "Provide a comprehensive analysis of this pilot report focusing on turbulence, icing, cloud tops, and other flight safety hazards. Be specific about altitude-dependent conditions, severity of hazards, and potential impact on different aircraft types. Include practical avoidance strategies when appropriate.";

const SIGMET_FOCUS: &str = "Thoroughly analyze this SIGMET emphasizing the hazard, affected area, altitudes, timing, and movement. Provide clear details about the safety implications for flights in or near the affected area, and suggest potential mitigation strategies.";

const GENERIC_FOCUS: &str = "Provide a thorough and detailed analysis of this aviation weather information focusing on all flight safety implications and operational considerations.";

/// Kind-specific analytical focus appended to the persona
#[must_use]
pub fn focus_clause(kind: &ReportKind) -> &'static str {
    match kind {
        ReportKind::Metar => METAR_FOCUS,
        ReportKind::Taf => TAF_FOCUS,
        ReportKind::Pirep => PIREP_FOCUS,
        ReportKind::Sigmet => SIGMET_FOCUS,
        ReportKind::Other(_) => GENERIC_FOCUS,
    }
}

/// System message: persona plus the focus for `kind`
#[must_use]
pub fn system_instruction(kind: &ReportKind) -> String {
    format!("{PERSONA_PREAMBLE}{}", focus_clause(kind))
}

/// User message with the report fields interpolated
#[must_use]
pub fn user_instruction(report: &Report) -> String {
    match report {
        Report::Metar(fields) => format!(
            "Create a detailed, pilot-friendly analysis of this METAR for {station}:\n\
             Raw METAR: {raw}\n\
             \n\
             Include the following in your summary:\n\
             1. Flight category (VFR/MVFR/IFR/LIFR) with clear explanation of the determining factors\n\
             2. Ceiling and visibility in plain language with operational impact\n\
             3. Detailed wind conditions including gusts and crosswind components if significant\n\
             4. All precipitation and weather phenomena with severity and implications\n\
             5. Temperature/dewpoint analysis including potential for icing or fog formation\n\
             6. Pressure trends and their significance\n\
             7. Any specific hazards or concerns evident from the report\n\
             \n\
             Format your response with clear sections and conclude with specific operational recommendations.",
            station = fields.station_or_placeholder(),
            raw = fields.raw_text_or_placeholder(),
        ),
        Report::Taf(fields) => format!(
            "Create a detailed, pilot-friendly analysis of this TAF forecast for {station}:\n\
             Raw TAF: {raw}\n\
             \n\
             Include the following in your analysis:\n\
             1. Overall summary of weather evolution during the forecast period\n\
             2. Detailed breakdown of each significant time period in chronological order\n\
             3. Clear identification of all IFR or MVFR conditions with timing and duration\n\
             4. Comprehensive wind analysis including direction shifts and gusting conditions\n\
             5. Detailed description of all forecast weather phenomena and their intensity\n\
             6. Identification of the most challenging period(s) during the forecast\n\
             7. Specific operational considerations for takeoff, en route, and landing phases\n\
             \n\
             Structure your response with clearly organized sections by time period, and conclude with practical flight planning recommendations.",
            station = fields.station_or_placeholder(),
            raw = fields.raw_text_or_placeholder(),
        ),
        Report::Pirep(fields) => format!(
            "Create a detailed, pilot-friendly analysis of this Pilot Report:\n\
             Raw PIREP: {raw}\n\
             \n\
             Include the following in your analysis:\n\
             1. Aircraft type, precise location, and altitude of the report\n\
             2. Detailed assessment of turbulence including type, intensity, and vertical extent\n\
             3. Comprehensive icing information including type, severity, and altitude layer\n\
             4. Thorough cloud information including bases, tops, layers, and coverage\n\
             5. Visibility conditions and any obscuring phenomena\n\
             6. Time context of the report and its current relevance\n\
             7. Correlation with forecast conditions if apparent\n\
             \n\
             Format your response with clear sections and conclude with specific operational recommendations for pilots in the area.",
            raw = fields.raw_text_or_placeholder(),
        ),
        Report::Sigmet(fields) => format!(
            "Create a detailed, pilot-friendly analysis of this SIGMET:\n\
             Raw SIGMET: {raw}\n\
             \n\
             Include the following in your analysis:\n\
             1. Precise identification of the hazard type and its severity\n\
             2. Detailed geographic description of the affected area with key landmarks/waypoints\n\
             3. Comprehensive altitude range information with flight level context\n\
             4. Specific validity timeframe and remaining duration\n\
             5. Movement, intensification, or dissipation trends of the hazard\n\
             6. Potential impact on different phases of flight and aircraft categories\n\
             7. Correlation with other weather data if apparent\n\
             \n\
             Structure your response with clear sections and conclude with specific avoidance or mitigation strategies.",
            raw = fields.raw_text_or_placeholder(),
        ),
        Report::Other { data, .. } => format!(
            "Please provide a comprehensive analysis of this aviation weather information with detailed operational implications for pilots: {}",
            Value::Object(data.clone())
        ),
    }
}

//! HTTP endpoints exposing report summaries

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::debug;

use crate::WxBriefError;
use crate::models::Report;
use crate::summary::{SummaryGenerator, SummaryOutcome, UnavailableReason};

#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<SummaryGenerator>,
}

#[derive(Serialize)]
pub struct ApiSummary {
    pub kind: String,
    pub status: &'static str,
    pub summary: Option<String>,
    pub reason: Option<UnavailableReason>,
}

impl ApiSummary {
    fn new(kind: String, outcome: SummaryOutcome) -> Self {
        let status = outcome.status();
        let reason = match &outcome {
            SummaryOutcome::Unavailable(reason) => Some(*reason),
            _ => None,
        };
        Self {
            kind,
            status,
            summary: outcome.into_text(),
            reason,
        }
    }
}

#[derive(Serialize)]
pub struct ApiHealth {
    pub status: &'static str,
    pub version: &'static str,
    pub summaries_enabled: bool,
}

pub fn router(generator: Arc<SummaryGenerator>) -> Router {
    Router::new()
        .route("/health", get(get_health))
        .route("/summary/{kind}", post(create_summary))
        .with_state(AppState { generator })
}

async fn get_health(State(state): State<AppState>) -> Json<ApiHealth> {
    Json(ApiHealth {
        status: "ok",
        version: crate::VERSION,
        summaries_enabled: state.generator.is_enabled(),
    })
}

async fn create_summary(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<ApiSummary>, (StatusCode, Json<Value>)> {
    let Value::Object(data) = payload else {
        let err = WxBriefError::validation("report data must be a JSON object");
        return Err((
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.user_message() })),
        ));
    };

    debug!("Summary requested for kind '{}' with {} fields", kind, data.len());
    let report = Report::from_parts(&kind, &data);
    let outcome = state.generator.summarize(&report).await;
    Ok(Json(ApiSummary::new(kind, outcome)))
}

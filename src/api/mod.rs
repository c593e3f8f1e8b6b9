use std::str::FromStr;
use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use chrono::{Datelike, Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::instrument;

use crate::{
    AdvisoryError,
    advisory::{self, Activity, AdvisoryRecord, AdvisoryRequest, Severity},
};

/// Shared handler state
#[derive(Debug, Clone)]
pub struct AppState {
    pub default_activity: Arc<str>,
}

impl AppState {
    pub fn new(default_activity: impl Into<Arc<str>>) -> Self {
        Self {
            default_activity: default_activity.into(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("daily_commute")
    }
}

/// Raw form fields as submitted. Everything stays text until
/// [`AdvisoryForm::into_request`] so malformed numbers surface as our error.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AdvisoryForm {
    pub temperature: Option<String>,
    pub humidity: Option<String>,
    pub wind_speed: Option<String>,
    pub activity: Option<String>,
    pub month: Option<String>,
    pub hour: Option<String>,
    pub precipitation: Option<String>,
}

fn parse_field<T: FromStr>(name: &str, value: Option<&str>, default: T) -> crate::Result<T> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|_| {
            AdvisoryError::validation(format!("could not convert {name} value '{raw}' to a number"))
        }),
    }
}

impl AdvisoryForm {
    /// Resolve defaults and parse numbers. `now` supplies month and hour
    /// when the form leaves them out.
    pub fn into_request(
        self,
        default_activity: &str,
        now: NaiveDateTime,
    ) -> crate::Result<AdvisoryRequest> {
        let activity = self
            .activity
            .as_deref()
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .unwrap_or(default_activity);

        // chrono months and hours always fit in i32
        let current_month = i32::try_from(now.month()).unwrap_or(1);
        let current_hour = i32::try_from(now.hour()).unwrap_or(0);

        Ok(AdvisoryRequest {
            temperature: parse_field("temperature", self.temperature.as_deref(), 0.0)?,
            humidity: parse_field("humidity", self.humidity.as_deref(), 0.0)?,
            wind_speed: parse_field("wind_speed", self.wind_speed.as_deref(), 0.0)?,
            activity: Activity::from(activity),
            month: parse_field("month", self.month.as_deref(), current_month)?,
            hour: parse_field("hour", self.hour.as_deref(), current_hour)?,
            precipitation: parse_field("precipitation", self.precipitation.as_deref(), 0.0)?,
        })
    }
}

/// Advisory fields plus the rendered summary
#[derive(Debug, Serialize, Deserialize)]
pub struct AdvisoryResponse {
    #[serde(flatten)]
    pub advisory: AdvisoryRecord,
    pub summary: String,
}

impl From<AdvisoryRecord> for AdvisoryResponse {
    fn from(advisory: AdvisoryRecord) -> Self {
        let summary = advisory::summarize(&advisory);
        Self { advisory, summary }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AboutResponse {
    pub name: String,
    pub version: String,
    pub description: String,
    pub activities: Vec<String>,
    pub severity_levels: Vec<String>,
}

impl IntoResponse for AdvisoryError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "error": self.user_message() }))).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/get_advisory", post(get_advisory))
        .route("/about", get(about))
        .route("/health", get(health))
        .with_state(state)
}

#[instrument(skip_all)]
async fn get_advisory(
    State(state): State<AppState>,
    form: Result<Form<AdvisoryForm>, FormRejection>,
) -> Result<Json<AdvisoryResponse>, AdvisoryError> {
    let Form(form) = form.map_err(|rejection| {
        tracing::warn!(error = %rejection, "unreadable advisory form");
        AdvisoryError::validation(rejection.body_text())
    })?;

    let request = form
        .into_request(&state.default_activity, Local::now().naive_local())
        .inspect_err(|e| tracing::warn!(error = %e, "rejected advisory request"))?;

    let record = advisory::generate_advisory(&request);
    tracing::info!(
        condition = %record.condition,
        severity = %record.severity,
        activity = %request.activity,
        "advisory generated"
    );

    Ok(Json(record.into()))
}

async fn about() -> Json<AboutResponse> {
    Json(AboutResponse {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: crate::VERSION.to_string(),
        description: env!("CARGO_PKG_DESCRIPTION").to_string(),
        activities: Activity::KNOWN.iter().map(|a| a.to_string()).collect(),
        severity_levels: Severity::ALL.iter().map(|s| s.to_string()).collect(),
    })
}

async fn health() -> StatusCode {
    StatusCode::OK
}

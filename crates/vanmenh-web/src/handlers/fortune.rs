//! Fortune endpoint — validates the submitted profile, builds the reading
//! prompt, and runs it through the fallback dispatcher.

use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use vanmenh_common::BirthProfile;
use vanmenh_llm::prompt::reading_messages;

use crate::error::ApiError;
use crate::state::SharedState;

/// Wire payload, camelCase to match the browser client.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub time_of_birth: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub year: Option<String>,
}

/// POST /api/fortune
pub async fn fortune_submit(
    State(state): State<SharedState>,
    Json(payload): Json<FortuneRequest>,
) -> Result<impl IntoResponse, ApiError> {
    // Required-field validation happens before any provider call.
    let profile = BirthProfile::new(
        payload.name.unwrap_or_default(),
        payload.date_of_birth.unwrap_or_default(),
        payload.time_of_birth,
        payload.gender,
        payload.year,
    )
    .map_err(|e| ApiError::Validation(e.to_string()))?;

    tracing::info!(name = %profile.name, year = %profile.target_year(), "fortune requested");

    let messages = reading_messages(&profile);
    let result = state.dispatcher.dispatch(&messages).await?;

    Ok(Json(json!({ "result": result })))
}

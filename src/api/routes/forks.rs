use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::{debug, warn};
use crate::api::AppState;
use crate::api::models::{DifferenceRequest, DifferenceResponse};
use crate::config::ForkRules;
use crate::errors::OpenQuestError;
use crate::fork::{indicator_for, validate_fork_with};
use crate::models::{DifficultyIndicator, ForkPayload, ForkValidationReport};
use crate::utils::similarity::compute_field_difference;

/// Bodies are decoded by hand so malformed fields surface as `InvalidInput`.
fn decode<T: serde::de::DeserializeOwned>(body: Value) -> Result<T, OpenQuestError> {
    serde_json::from_value(body).map_err(|e| OpenQuestError::InvalidInput(e.to_string()))
}

/// Scoring is CPU-bound; keep it off the async workers.
async fn score_blocking<T, F>(f: F) -> Result<T, OpenQuestError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| OpenQuestError::Internal(format!("Scoring task failed: {}", e)))
}

pub async fn validate(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<ForkValidationReport>, OpenQuestError> {
    let req: ForkPayload = decode(body)?;
    if req.candidate.is_blank() {
        warn!(parent = ?req.parent_id, "Validating fork with no candidate text");
    }

    let rules = state.rules.clone();
    let parent_id = req.parent_id.clone();
    let result = score_blocking(move || validate_fork_with(&req.original, &req.candidate, &rules)).await?;
    debug!(parent = ?parent_id, valid = result.is_valid, "Validated fork request");
    let indicator = indicator_for(result.overall_diff, &state.rules.indicator);
    Ok(Json(ForkValidationReport { result, indicator }))
}

pub async fn difference(Json(body): Json<Value>) -> Result<Json<DifferenceResponse>, OpenQuestError> {
    let req: DifferenceRequest = decode(body)?;
    let difference = score_blocking(move || compute_field_difference(&req.original, &req.candidate)).await?;
    debug!(difference, "Computed field difference");
    Ok(Json(DifferenceResponse { difference }))
}

pub async fn indicator(
    State(state): State<AppState>,
    Path(score): Path<u16>,
) -> Result<Json<DifficultyIndicator>, OpenQuestError> {
    let score = u8::try_from(score)
        .ok()
        .filter(|s| *s <= 100)
        .ok_or_else(|| OpenQuestError::InvalidInput(format!("Score must be between 0 and 100, got {}", score)))?;
    Ok(Json(indicator_for(score, &state.rules.indicator)))
}

pub async fn get_rules(State(state): State<AppState>) -> Json<ForkRules> {
    Json(state.rules.as_ref().clone())
}

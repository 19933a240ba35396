use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::info;
use crate::api::AppState;
use crate::api::models::ClearDraftResponse;
use crate::errors::OpenQuestError;
use crate::models::StoredDraft;

pub async fn save_draft(
    State(state): State<AppState>,
    Path(key): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<StoredDraft>, OpenQuestError> {
    let draft = state.drafts.save(&key, &body)?;
    info!(key = %key, "Draft saved");
    Ok(Json(draft))
}

pub async fn load_draft(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<StoredDraft>, OpenQuestError> {
    state.drafts.load(&key)?
        .map(Json)
        .ok_or_else(|| OpenQuestError::NotFound(format!("Draft {}", key)))
}

pub async fn clear_draft(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<ClearDraftResponse>, OpenQuestError> {
    let cleared = state.drafts.clear(&key)?;
    Ok(Json(ClearDraftResponse { key, cleared }))
}

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::warn;
use crate::errors::OpenQuestError;

impl IntoResponse for OpenQuestError {
    fn into_response(self) -> axum::response::Response {
        let class = self.classify();
        let status = StatusCode::from_u16(class.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            warn!(error_type = class.error_type, error = %self, "Request failed");
        }

        (status, Json(json!({"error": self.to_string()}))).into_response()
    }
}

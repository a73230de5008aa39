use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;
use crate::errors::AuditError;

impl IntoResponse for AuditError {
    fn into_response(self) -> axum::response::Response {
        let class = self.classify();
        let (status, message) = match &self {
            AuditError::InvalidInput(msg) | AuditError::InvalidLead(msg) => {
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            _ => {
                error!(error = %self, error_type = class.error_type, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status, Json(json!({"error": message, "type": class.error_type}))).into_response()
    }
}

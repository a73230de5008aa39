use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use crate::errors::AuditError;

/// `Json` extractor whose rejections use the API's error body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AuditError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AuditError {
    fn from(rejection: JsonRejection) -> Self {
        AuditError::InvalidInput(rejection.body_text())
    }
}

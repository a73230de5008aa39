use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use crate::api::AppState;
use crate::api::extract::AppJson;
use crate::api::models::LeadRequest;
use crate::errors::AuditError;
use crate::models::lead::LeadReceipt;

pub async fn submit_lead(
    State(state): State<AppState>,
    AppJson(req): AppJson<LeadRequest>,
) -> Result<(StatusCode, Json<LeadReceipt>), AuditError> {
    let report = req.inputs.evaluate_cached(&state.cache)?;
    let receipt = state.leads.submit(&req.lead, &report, req.inputs.industry).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::info;
use crate::api::AppState;
use crate::api::extract::AppJson;
use crate::api::models::{FormattedFigures, ImpactResponse};
use crate::errors::AuditError;
use crate::impact::AuditInputs;
use crate::reporting::{render_summary, SUMMARY_FILE_NAME};

pub async fn calculate_impact(
    State(state): State<AppState>,
    AppJson(inputs): AppJson<AuditInputs>,
) -> Result<Json<ImpactResponse>, AuditError> {
    let report = inputs.evaluate_cached(&state.cache)?;

    info!(
        industry = %inputs.industry,
        total_savings_crores = report.total_savings(),
        "Impact forecast generated"
    );

    Ok(Json(ImpactResponse {
        industry: inputs.industry,
        formatted: FormattedFigures::from(&report),
        context: inputs.industry.context(),
        report,
    }))
}

pub async fn export_summary(
    State(state): State<AppState>,
    AppJson(inputs): AppJson<AuditInputs>,
) -> Result<impl IntoResponse, AuditError> {
    let report = inputs.evaluate_cached(&state.cache)?;
    let body = render_summary(&report, inputs.industry);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", SUMMARY_FILE_NAME),
            ),
        ],
        body,
    ))
}

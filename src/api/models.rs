use serde::{Deserialize, Serialize};
use crate::impact::{AuditInputs, ImpactReport};
use crate::models::industry::{Industry, IndustryContext};
use crate::models::lead::LeadSubmission;
use crate::utils::formatting::{format_crores, format_hours, format_lakhs};

#[derive(Serialize)]
pub struct ImpactResponse {
    pub industry: Industry,
    pub report: ImpactReport,
    pub formatted: FormattedFigures,
    pub context: IndustryContext,
}

/// Display strings for each figure of a report.
#[derive(Serialize)]
pub struct FormattedFigures {
    pub annual_maintenance_budget: String,
    pub unplanned_downtime_hours: String,
    pub revenue_loss_per_hour: String,
    pub maintenance_savings: String,
    pub downtime_cost: String,
    pub downtime_savings: String,
    pub projected_downtime_loss: String,
    pub total_savings: String,
}

impl From<&ImpactReport> for FormattedFigures {
    fn from(report: &ImpactReport) -> Self {
        Self {
            annual_maintenance_budget: format_crores(report.annual_maintenance_budget()),
            unplanned_downtime_hours: format_hours(report.unplanned_downtime_hours()),
            revenue_loss_per_hour: format_lakhs(report.revenue_loss_per_hour()),
            maintenance_savings: format_crores(report.maintenance_savings()),
            downtime_cost: format_crores(report.downtime_cost()),
            downtime_savings: format_crores(report.downtime_savings()),
            projected_downtime_loss: format_crores(report.projected_downtime_loss()),
            total_savings: format_crores(report.total_savings()),
        }
    }
}

#[derive(Deserialize)]
pub struct LeadRequest {
    #[serde(flatten)]
    pub lead: LeadSubmission,
    pub inputs: AuditInputs,
}

#[derive(Serialize)]
pub struct IndustryEntry {
    pub name: Industry,
    #[serde(flatten)]
    pub context: IndustryContext,
}

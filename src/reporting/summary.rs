use std::path::Path;
use tracing::info;
use crate::errors::AuditError;
use crate::impact::ImpactReport;
use crate::models::industry::Industry;
use crate::utils::formatting::{format_crores, format_hours, format_lakhs};

pub const SUMMARY_FILE_NAME: &str = "sensyva-data-gap-audit-summary.txt";

const SUMMARY_TITLE: &str = "Sensyva AI | 95% Data Gap Audit Snapshot";
const NEXT_STEP: &str = "Next Step: Share your operations context so we can model the first 90 days with Sensyva Edge AI.";

/// One-page plain-text summary of a report.
pub fn render_summary(report: &ImpactReport, industry: Industry) -> String {
    [
        SUMMARY_TITLE.to_string(),
        format!("Industry: {}", industry),
        format!("Annual Maintenance Budget: {}", format_crores(report.annual_maintenance_budget())),
        format!("Unplanned Downtime (hrs/year): {}", format_hours(report.unplanned_downtime_hours())),
        format!("Downtime Cost (per hour): {}", format_lakhs(report.revenue_loss_per_hour())),
        format!("Current Downtime Loss: {}", format_crores(report.downtime_cost())),
        format!("Maintenance Savings Potential: {}", format_crores(report.maintenance_savings())),
        format!("Downtime Savings Potential: {}", format_crores(report.downtime_savings())),
        format!("Total Potential Annual Savings: {}", format_crores(report.total_savings())),
        String::new(),
        NEXT_STEP.to_string(),
    ]
    .join("\n")
}

/// Write the summary to `path`, creating parent directories as needed.
pub async fn write_summary(
    path: &Path,
    report: &ImpactReport,
    industry: Industry,
) -> Result<(), AuditError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    tokio::fs::write(path, render_summary(report, industry)).await?;
    info!(path = %path.display(), "Summary exported");
    Ok(())
}

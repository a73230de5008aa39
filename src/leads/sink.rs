use async_trait::async_trait;
use chrono::Utc;
use tracing::info;
use uuid::Uuid;
use crate::errors::AuditError;
use crate::impact::ImpactReport;
use crate::models::industry::Industry;
use crate::models::lead::{LeadReceipt, LeadSubmission};
use crate::utils::formatting::format_crores;

/// Destination for captured leads.
#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn submit(
        &self,
        lead: &LeadSubmission,
        report: &ImpactReport,
        industry: Industry,
    ) -> Result<LeadReceipt, AuditError>;

    /// Sink name for logging
    fn sink_name(&self) -> &str;
}

/// Accepts valid leads and records them in the log only. Nothing is stored
/// or forwarded.
#[derive(Debug, Default, Clone)]
pub struct LoggingLeadSink;

#[async_trait]
impl LeadSink for LoggingLeadSink {
    async fn submit(
        &self,
        lead: &LeadSubmission,
        report: &ImpactReport,
        industry: Industry,
    ) -> Result<LeadReceipt, AuditError> {
        lead.validate()?;

        let reference = Uuid::new_v4();
        let total = format_crores(report.total_savings());

        info!(
            reference = %reference,
            company = %lead.company,
            industry = %industry,
            total_savings_crores = report.total_savings(),
            sink = self.sink_name(),
            "Lead captured"
        );

        Ok(LeadReceipt {
            reference,
            received_at: Utc::now(),
            message: format!(
                "Thank you, {}! We'll follow up at {} to close the remaining {} gap. \
                 A calendar link will arrive shortly so you can choose your 15-minute window.",
                lead.name.trim(),
                lead.email.trim(),
                total,
            ),
        })
    }

    fn sink_name(&self) -> &str {
        "log"
    }
}

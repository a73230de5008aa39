use std::sync::LazyLock;
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use crate::errors::AuditError;

pub const MISSING_FIELDS_MESSAGE: &str = "Please fill out your name, work email, and company so we can prepare the custom briefing.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles")
});

/// Contact details left on the "take the next step" form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    /// Company name and title, free-form.
    pub company: String,
    #[serde(default)]
    pub phone: Option<String>,
    /// Preferred time zone or region.
    #[serde(default)]
    pub region: Option<String>,
}

impl LeadSubmission {
    pub fn validate(&self) -> Result<(), AuditError> {
        let required = [&self.name, &self.email, &self.company];
        if required.iter().any(|v| v.trim().is_empty()) {
            return Err(AuditError::InvalidLead(MISSING_FIELDS_MESSAGE.to_string()));
        }
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(AuditError::InvalidLead(format!(
                "'{}' does not look like a work email address.",
                self.email.trim()
            )));
        }
        Ok(())
    }
}

/// Acknowledgement returned once a lead has been accepted.
#[derive(Debug, Clone, Serialize)]
pub struct LeadReceipt {
    pub reference: Uuid,
    pub received_at: DateTime<Utc>,
    pub message: String,
}

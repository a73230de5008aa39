use serde::{Deserialize, Serialize};
use crate::errors::AuditError;
use crate::models::industry::Industry;
use super::calculator::{ImpactCalculator, ImpactReport};
use super::cache::ImpactCache;

pub const INVALID_INPUT_MESSAGE: &str = "Please enter values greater than zero for budget, downtime hours, and hourly loss so we can build a credible forecast.";
pub const OUT_OF_RANGE_MESSAGE: &str = "Those figures are too large to build a credible forecast. Please check the units: budget in Crores, hourly loss in Lakhs.";

/// One audit form submission, as received by a presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AuditInputs {
    /// Crores.
    pub annual_maintenance_budget: f64,
    pub unplanned_downtime_hours: f64,
    /// Lakhs per downtime hour.
    pub revenue_loss_per_hour: f64,
    #[serde(default)]
    pub industry: Industry,
}

impl AuditInputs {
    /// All three figures must be finite and strictly positive.
    pub fn validate(&self) -> Result<(), AuditError> {
        let values = [
            self.annual_maintenance_budget,
            self.unplanned_downtime_hours,
            self.revenue_loss_per_hour,
        ];
        if values.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(AuditError::InvalidInput(INVALID_INPUT_MESSAGE.to_string()));
        }
        Ok(())
    }

    pub fn evaluate(&self, calculator: &ImpactCalculator) -> Result<ImpactReport, AuditError> {
        self.validate()?;
        ensure_finite(calculator.compute(
            self.annual_maintenance_budget,
            self.unplanned_downtime_hours,
            self.revenue_loss_per_hour,
        ))
    }

    pub fn evaluate_cached(&self, cache: &ImpactCache) -> Result<ImpactReport, AuditError> {
        self.validate()?;
        ensure_finite(cache.compute(
            self.annual_maintenance_budget,
            self.unplanned_downtime_hours,
            self.revenue_loss_per_hour,
        ))
    }
}

/// Finite inputs can still overflow once multiplied together.
fn ensure_finite(report: ImpactReport) -> Result<ImpactReport, AuditError> {
    if !report.is_finite() {
        return Err(AuditError::InvalidInput(OUT_OF_RANGE_MESSAGE.to_string()));
    }
    Ok(report)
}

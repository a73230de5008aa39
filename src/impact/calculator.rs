use serde::{Deserialize, Serialize};

/// Share of the annual maintenance budget recovered by predictive maintenance.
pub const MAINTENANCE_REDUCTION_RATE: f64 = 0.65;
/// Share of the unplanned downtime cost avoided by early anomaly detection.
pub const DOWNTIME_REDUCTION_RATE: f64 = 0.70;

/// Lakhs per Crore.
const LAKHS_PER_CRORE: f64 = 100.0;

/// The two reduction benchmarks applied to a customer's baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReductionRates {
    pub maintenance: f64,
    pub downtime: f64,
}

impl Default for ReductionRates {
    fn default() -> Self {
        Self {
            maintenance: MAINTENANCE_REDUCTION_RATE,
            downtime: DOWNTIME_REDUCTION_RATE,
        }
    }
}

impl ReductionRates {
    pub fn maintenance_percentage(&self) -> u32 {
        as_percentage(self.maintenance)
    }

    pub fn downtime_percentage(&self) -> u32 {
        as_percentage(self.downtime)
    }
}

fn as_percentage(rate: f64) -> u32 {
    (rate * 100.0).round() as u32
}

/// Projected savings for one set of operational inputs.
///
/// Currency amounts are in Crores except `revenue_loss_per_hour`, which keeps
/// the Lakhs unit it was entered in. Fields are read-only so that
/// `total_savings` always equals the sum of the two savings terms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ImpactReport {
    annual_maintenance_budget: f64,
    unplanned_downtime_hours: f64,
    revenue_loss_per_hour: f64,
    maintenance_reduction_percentage: u32,
    downtime_reduction_percentage: u32,
    maintenance_savings: f64,
    downtime_cost: f64,
    downtime_savings: f64,
    total_savings: f64,
}

impl ImpactReport {
    pub fn annual_maintenance_budget(&self) -> f64 {
        self.annual_maintenance_budget
    }

    pub fn unplanned_downtime_hours(&self) -> f64 {
        self.unplanned_downtime_hours
    }

    /// Hourly revenue loss in Lakhs, as entered.
    pub fn revenue_loss_per_hour(&self) -> f64 {
        self.revenue_loss_per_hour
    }

    pub fn maintenance_reduction_percentage(&self) -> u32 {
        self.maintenance_reduction_percentage
    }

    pub fn downtime_reduction_percentage(&self) -> u32 {
        self.downtime_reduction_percentage
    }

    pub fn maintenance_savings(&self) -> f64 {
        self.maintenance_savings
    }

    /// Current yearly cost of unplanned downtime.
    pub fn downtime_cost(&self) -> f64 {
        self.downtime_cost
    }

    pub fn downtime_savings(&self) -> f64 {
        self.downtime_savings
    }

    pub fn total_savings(&self) -> f64 {
        self.total_savings
    }

    /// False when the inputs were large enough to overflow a figure.
    pub fn is_finite(&self) -> bool {
        [
            self.maintenance_savings,
            self.downtime_cost,
            self.downtime_savings,
            self.total_savings,
        ]
        .iter()
        .all(|v| v.is_finite())
    }

    /// Downtime loss that remains after the projected reduction.
    pub fn projected_downtime_loss(&self) -> f64 {
        self.downtime_cost - self.downtime_savings
    }
}

/// Applies a fixed pair of reduction rates to operational inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ImpactCalculator {
    rates: ReductionRates,
}

impl ImpactCalculator {
    pub fn new(rates: ReductionRates) -> Self {
        Self { rates }
    }

    pub fn rates(&self) -> ReductionRates {
        self.rates
    }

    /// Inputs are expected to be non-negative; nothing is validated here.
    pub fn compute(
        &self,
        annual_maintenance_budget: f64,
        unplanned_downtime_hours: f64,
        revenue_loss_per_hour_lakhs: f64,
    ) -> ImpactReport {
        let maintenance_savings = annual_maintenance_budget * self.rates.maintenance;

        let revenue_loss_per_hour_crores = revenue_loss_per_hour_lakhs / LAKHS_PER_CRORE;
        let downtime_cost = unplanned_downtime_hours * revenue_loss_per_hour_crores;
        let downtime_savings = downtime_cost * self.rates.downtime;

        ImpactReport {
            annual_maintenance_budget,
            unplanned_downtime_hours,
            revenue_loss_per_hour: revenue_loss_per_hour_lakhs,
            maintenance_reduction_percentage: self.rates.maintenance_percentage(),
            downtime_reduction_percentage: self.rates.downtime_percentage(),
            maintenance_savings,
            downtime_cost,
            downtime_savings,
            total_savings: maintenance_savings + downtime_savings,
        }
    }
}

/// Computes an [`ImpactReport`] with the default reduction rates.
pub fn compute(
    annual_maintenance_budget: f64,
    unplanned_downtime_hours: f64,
    revenue_loss_per_hour_lakhs: f64,
) -> ImpactReport {
    ImpactCalculator::default().compute(
        annual_maintenance_budget,
        unplanned_downtime_hours,
        revenue_loss_per_hour_lakhs,
    )
}

use dashmap::DashMap;
use tracing::debug;
use super::calculator::{ImpactCalculator, ImpactReport};

type InputKey = (u64, u64, u64);

/// Memoizes reports by the exact bit pattern of the three inputs.
///
/// Shared across request handlers. When `max_entries` is reached the map is
/// cleared before the next insert; a `max_entries` of zero disables storage.
pub struct ImpactCache {
    calculator: ImpactCalculator,
    entries: DashMap<InputKey, ImpactReport>,
    max_entries: usize,
}

impl ImpactCache {
    pub fn new(calculator: ImpactCalculator, max_entries: usize) -> Self {
        Self {
            calculator,
            entries: DashMap::new(),
            max_entries,
        }
    }

    pub fn calculator(&self) -> &ImpactCalculator {
        &self.calculator
    }

    pub fn compute(
        &self,
        annual_maintenance_budget: f64,
        unplanned_downtime_hours: f64,
        revenue_loss_per_hour_lakhs: f64,
    ) -> ImpactReport {
        let key = (
            annual_maintenance_budget.to_bits(),
            unplanned_downtime_hours.to_bits(),
            revenue_loss_per_hour_lakhs.to_bits(),
        );

        if let Some(hit) = self.entries.get(&key) {
            return *hit;
        }

        let report = self.calculator.compute(
            annual_maintenance_budget,
            unplanned_downtime_hours,
            revenue_loss_per_hour_lakhs,
        );

        if self.max_entries > 0 {
            if self.entries.len() >= self.max_entries {
                debug!(entries = self.entries.len(), "Impact cache full, clearing");
                self.entries.clear();
            }
            self.entries.insert(key, report);
        }

        report
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }
}

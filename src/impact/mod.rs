pub mod calculator;
pub mod cache;
pub mod validation;

pub use calculator::{
    compute, ImpactCalculator, ImpactReport, ReductionRates,
    DOWNTIME_REDUCTION_RATE, MAINTENANCE_REDUCTION_RATE,
};
pub use cache::ImpactCache;
pub use validation::AuditInputs;

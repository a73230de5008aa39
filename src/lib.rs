pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod impact;
pub mod leads;
pub mod models;
pub mod reporting;
pub mod utils;

pub use errors::AuditError;
pub use impact::{compute, ImpactCalculator, ImpactReport};

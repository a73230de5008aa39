pub mod types;
pub mod classification;

pub use types::AuditError;
pub use classification::ErrorClassification;

pub mod industry;
pub mod lead;

pub use industry::{Industry, IndustryContext};
pub use lead::{LeadReceipt, LeadSubmission};

pub mod sink;

pub use sink::{LeadSink, LoggingLeadSink};

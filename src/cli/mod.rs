pub mod commands;
pub mod calculate;
pub mod lead;
pub mod industries;
pub mod serve;
pub mod progress;

pub use commands::{Cli, Commands};

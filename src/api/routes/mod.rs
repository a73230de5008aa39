pub mod health;
pub mod impact;
pub mod industries;
pub mod leads;

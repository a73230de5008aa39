use clap::{Parser, Subcommand, Args};
use crate::impact::AuditInputs;
use crate::models::industry::Industry;

#[derive(Parser)]
#[command(name = "sensyva-audit", version, about = "95% Data Gap Audit: maintenance and downtime savings forecast")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase log verbosity (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate the projected savings for your operation
    Calculate(CalculateArgs),
    /// Calculate, then leave your details for a follow-up briefing
    Lead(LeadArgs),
    /// List supported industries and their context
    Industries,
    /// Start the HTTP API server
    Serve(ServeArgs),
    /// Validate a configuration file
    Validate(ValidateArgs),
}

#[derive(Args, Clone)]
pub struct InputArgs {
    /// Annual maintenance and repair budget, in Crores INR
    #[arg(short, long, allow_negative_numbers = true)]
    pub budget: f64,

    /// Annual unplanned downtime, in hours
    #[arg(short = 'd', long, allow_negative_numbers = true)]
    pub downtime_hours: f64,

    /// Average revenue loss per downtime hour, in Lakhs INR
    #[arg(short, long, allow_negative_numbers = true)]
    pub loss_per_hour: f64,

    /// Industry sector: Manufacturing, Energy, Logistics, Defense, Other
    #[arg(short, long)]
    pub industry: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

impl InputArgs {
    /// Falls back to `default_industry` when no industry was given.
    pub fn to_inputs(&self, default_industry: Industry) -> AuditInputs {
        AuditInputs {
            annual_maintenance_budget: self.budget,
            unplanned_downtime_hours: self.downtime_hours,
            revenue_loss_per_hour: self.loss_per_hour,
            industry: self
                .industry
                .as_deref()
                .map(Industry::from_label)
                .unwrap_or(default_industry),
        }
    }
}

#[derive(Args, Clone)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Write the one-page text summary to this path
    #[arg(long)]
    pub export: Option<String>,

    /// Skip the staged progress display
    #[arg(long)]
    pub no_progress: bool,
}

#[derive(Args, Clone)]
pub struct LeadArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Your full name
    #[arg(long)]
    pub name: String,

    /// Work email address
    #[arg(long)]
    pub email: String,

    /// Company name and title
    #[arg(long)]
    pub company: String,

    /// Phone / WhatsApp
    #[arg(long)]
    pub phone: Option<String>,

    /// Preferred time zone or region
    #[arg(long)]
    pub region: Option<String>,
}

#[derive(Args, Clone)]
pub struct ServeArgs {
    /// Listen port
    #[arg(long)]
    pub port: Option<u16>,

    /// Listen address
    #[arg(long)]
    pub host: Option<String>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<String>,
}

#[derive(Args, Clone)]
pub struct ValidateArgs {
    /// Config file to validate
    pub config: String,
}

use console::style;
use crate::cli::calculate::load_config;
use crate::cli::commands::LeadArgs;
use crate::errors::AuditError;
use crate::impact::ImpactCalculator;
use crate::leads::{LeadSink, LoggingLeadSink};
use crate::models::lead::LeadSubmission;
use crate::utils::formatting::format_crores;

pub async fn handle_lead(args: LeadArgs, quiet: bool) -> Result<(), AuditError> {
    let config = load_config(args.inputs.config.as_deref()).await?;
    let inputs = args.inputs.to_inputs(config.default_industry());
    let report = inputs.evaluate(&ImpactCalculator::new(config.reduction_rates()))?;

    let lead = LeadSubmission {
        name: args.name,
        email: args.email,
        company: args.company,
        phone: args.phone,
        region: args.region,
    };

    if !quiet {
        println!(
            "Unlock {} & schedule a 15-min call",
            style(format_crores(report.total_savings())).cyan().bold()
        );
    }

    let receipt = LoggingLeadSink.submit(&lead, &report, inputs.industry).await?;

    println!("{} {}", style("✓").green().bold(), receipt.message);
    if !quiet {
        println!("  Reference: {}", style(receipt.reference).dim());
    }

    Ok(())
}

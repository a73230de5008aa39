use std::path::PathBuf;
use crate::cli::commands::CalculateArgs;
use crate::cli::progress::AuditProgress;
use crate::config::{self, AuditConfig};
use crate::errors::AuditError;
use crate::impact::ImpactCalculator;
use crate::reporting::{render_forecast_markdown, write_summary};
use serde_json::json;
use tracing::info;

pub async fn handle_calculate(args: CalculateArgs, quiet: bool) -> Result<(), AuditError> {
    let config = load_config(args.inputs.config.as_deref()).await?;
    let inputs = args.inputs.to_inputs(config.default_industry());
    let calculator = ImpactCalculator::new(config.reduction_rates());

    let report = inputs.evaluate(&calculator)?;
    info!(
        industry = %inputs.industry,
        total_savings_crores = report.total_savings(),
        "Impact forecast generated"
    );

    if !args.json && !quiet && !args.no_progress && config.simulate_latency() {
        AuditProgress::new()?.run().await;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&json!({
            "industry": inputs.industry,
            "report": report,
            "context": inputs.industry.context(),
        }))?);
    } else {
        println!("{}", render_forecast_markdown(&report, inputs.industry));
    }

    if let Some(path) = &args.export {
        let path = PathBuf::from(path);
        write_summary(&path, &report, inputs.industry).await?;
        if !quiet {
            eprintln!("Summary written to {}", path.display());
        }
    }

    Ok(())
}

/// Config file if one was given, defaults otherwise.
pub async fn load_config(path: Option<&str>) -> Result<AuditConfig, AuditError> {
    match path {
        Some(p) => config::parse_config(&PathBuf::from(p)).await,
        None => Ok(AuditConfig::default()),
    }
}

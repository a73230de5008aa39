use clap::Parser;
use sensyva_audit::{cli, config, errors};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let cli = cli::Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(!cli.no_color)
        .with_writer(std::io::stderr)
        .init();

    if cli.no_color {
        console::set_colors_enabled(false);
    }

    let quiet = cli.quiet;
    let result = match cli.command {
        cli::Commands::Calculate(args) => cli::calculate::handle_calculate(args, quiet).await,
        cli::Commands::Lead(args) => cli::lead::handle_lead(args, quiet).await,
        cli::Commands::Industries => cli::industries::handle_industries(quiet).await,
        cli::Commands::Serve(args) => cli::serve::handle_serve(args).await,
        cli::Commands::Validate(args) => handle_validate(args).await,
    };

    if let Err(e) = result {
        let class = e.classify();
        if class.user_facing {
            eprintln!("{}", user_message(&e));
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(class.exit_code);
    }
}

fn user_message(e: &errors::AuditError) -> String {
    match e {
        errors::AuditError::InvalidInput(msg) | errors::AuditError::InvalidLead(msg) => msg.clone(),
        other => other.to_string(),
    }
}

async fn handle_validate(args: cli::commands::ValidateArgs) -> Result<(), errors::AuditError> {
    let path = std::path::PathBuf::from(&args.config);
    let config = config::parse_config(&path).await?;
    let rates = config.reduction_rates();
    println!(
        "Configuration is valid: {} (maintenance {}%, downtime {}%)",
        args.config,
        rates.maintenance_percentage(),
        rates.downtime_percentage(),
    );
    Ok(())
}

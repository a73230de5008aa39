use crate::cli::calculate::load_config;
use crate::cli::commands::ServeArgs;
use crate::errors::AuditError;
use crate::api;
use tracing::info;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8080;

pub async fn handle_serve(args: ServeArgs) -> Result<(), AuditError> {
    let config = load_config(args.config.as_deref()).await?;

    let host = args.host.clone()
        .or_else(|| config.server_host().map(str::to_string))
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = args.port.or(config.server_port()).unwrap_or(DEFAULT_PORT);

    let rates = config.reduction_rates();
    info!(
        host = %host,
        port,
        maintenance_rate = rates.maintenance,
        downtime_rate = rates.downtime,
        cache_entries = config.cache_capacity(),
        "Starting API server"
    );

    let state = api::create_app_state(config);
    let app = api::build_router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AuditError::Internal(format!("Server error: {}", e)))?;

    Ok(())
}

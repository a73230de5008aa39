pub mod routes;
pub mod models;
pub mod errors;
pub mod extract;

use std::sync::Arc;
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use crate::config::AuditConfig;
use crate::impact::{ImpactCache, ImpactCalculator};
use crate::leads::{LeadSink, LoggingLeadSink};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AuditConfig>,
    pub cache: Arc<ImpactCache>,
    pub leads: Arc<dyn LeadSink>,
}

pub fn create_app_state(config: AuditConfig) -> AppState {
    let calculator = ImpactCalculator::new(config.reduction_rates());
    let cache = ImpactCache::new(calculator, config.cache_capacity());
    AppState {
        config: Arc::new(config),
        cache: Arc::new(cache),
        leads: Arc::new(LoggingLeadSink),
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", axum::routing::get(routes::health::health_check))
        .route("/api/industries", axum::routing::get(routes::industries::list_industries))
        .route("/api/impact", axum::routing::post(routes::impact::calculate_impact))
        .route("/api/impact/summary", axum::routing::post(routes::impact::export_summary))
        .route("/api/leads", axum::routing::post(routes::leads::submit_lead))
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

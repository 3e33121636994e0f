use anyhow::Result;
use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;
mod export_routes;
mod history;
mod routes;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "enviro_gateway=debug,info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // History routes - separate router with its own store state
    let history_state = history::HistoryState::default();
    let history_router = history::history_routes(history_state);

    // Analysis routes are stateless: every request is computed fresh from
    // its inputs against the static parameter tables.
    let analysis_routes = Router::new()
        .route("/parameters", get(routes::list_parameters))
        .route("/analysis/:parameter", post(routes::analyze_point))
        .route("/national/:parameter", get(routes::national_analysis))
        .route("/export/:format", post(export_routes::export_result));

    let app = Router::new()
        .route("/health", get(health))
        .nest("/api/v1", analysis_routes)
        .nest("/api/v1/history", history_router)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let port = std::env::var("ENVIRO_GATEWAY_PORT")
        .or_else(|_| std::env::var("PORT"))
        .unwrap_or_else(|_| "18680".to_string());
    let addr = format!("0.0.0.0:{}", port);

    tracing::info!("🛰️  Enviro Gateway starting on {}", addr);
    tracing::info!("   Parameters: NDVI, aerosol, NO2, SO2, CO");
    tracing::info!("   Coverage: Pakistan bounding box");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "enviro-gateway",
        "country": "Pakistan",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

//! Hoa Cương Agricultural Traceability - Backend Server
//!
//! Keeps planting areas, farmers and purchase records in memory, serves the
//! dashboard aggregates and requests AI-written reports.

use axum::{routing::get, Router};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod error;
mod external;
mod handlers;
mod routes;
mod services;
mod store;

pub use config::Config;

use external::GeminiClient;
use services::{DashboardService, ReportService};
use store::AppStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<AppStore>,
    pub dashboard: DashboardService,
    pub reports: ReportService,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: Arc<AppStore>, reports: ReportService, config: Config) -> Self {
        Self {
            dashboard: DashboardService::new(Arc::clone(&store)),
            store,
            reports,
            config: Arc::new(config),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agri_trace_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::load()?;

    tracing::info!("Starting Hoa Cương Traceability Server");
    tracing::info!("Environment: {}", config.environment);

    let store = if config.data.seed_on_startup {
        tracing::info!("Loading demo data");
        AppStore::seeded()
    } else {
        AppStore::default()
    };

    let client = GeminiClient::from_config(&config.gemini)?;
    if client.is_none() {
        tracing::warn!("No Gemini API key configured; reports will return a notice");
    }

    // Create application state
    let state = AppState::new(Arc::new(store), ReportService::new(client), config.clone());

    // Build application
    let app = create_app(state);

    // Start server
    let ip: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::from((ip, config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes and middleware
fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Hoa Cương Agri Traceability API v1.0"
}

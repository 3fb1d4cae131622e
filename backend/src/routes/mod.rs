//! Route definitions for the Hoa Cương traceability API

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/data", get(handlers::get_data))
        .route("/dashboard", get(handlers::get_dashboard))
        .nest("/areas", area_routes())
        .nest("/farmers", farmer_routes())
        .nest("/purchases", purchase_routes())
        .route("/reports", post(handlers::generate_report))
}

/// Planting area routes
fn area_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_areas).post(handlers::create_area))
        .route(
            "/:area_id",
            get(handlers::get_area).delete(handlers::delete_area),
        )
}

/// Farmer routes
fn farmer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_farmers).post(handlers::create_farmer))
        .route(
            "/:farmer_id",
            get(handlers::get_farmer).delete(handlers::delete_farmer),
        )
}

/// Purchase routes; records cannot be deleted
fn purchase_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_purchases).post(handlers::create_purchase),
        )
        .route("/:purchase_id", get(handlers::get_purchase))
}

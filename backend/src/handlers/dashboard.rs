//! Dashboard handlers

use axum::{extract::State, Json};
use shared::{AppData, DashboardSummary};

use crate::AppState;

/// Get dashboard aggregates
pub async fn get_dashboard(State(state): State<AppState>) -> Json<DashboardSummary> {
    Json(state.dashboard.get_dashboard())
}

/// Get the whole data snapshot
pub async fn get_data(State(state): State<AppState>) -> Json<AppData> {
    Json(state.store.snapshot().as_ref().clone())
}

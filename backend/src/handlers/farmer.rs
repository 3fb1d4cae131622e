//! Farmer HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use shared::{FarmerRow, NewFarmer};

use crate::error::AppResult;
use crate::handlers::area::SearchQuery;
use crate::services::FarmerService;
use crate::AppState;

/// List farmers with their linked area
pub async fn list_farmers(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<serde_json::Value> {
    let service = FarmerService::new(state.store.clone());
    let farmers = service.list_farmers(query.search.as_deref());
    Json(serde_json::json!({ "farmers": farmers }))
}

/// Get a farmer
pub async fn get_farmer(
    State(state): State<AppState>,
    Path(farmer_id): Path<String>,
) -> AppResult<Json<FarmerRow>> {
    let service = FarmerService::new(state.store.clone());
    Ok(Json(service.get_farmer(&farmer_id)?))
}

/// Register a farmer
pub async fn create_farmer(
    State(state): State<AppState>,
    Json(input): Json<NewFarmer>,
) -> AppResult<impl IntoResponse> {
    let service = FarmerService::new(state.store.clone());
    let farmer = service.create_farmer(input)?;
    Ok((StatusCode::CREATED, Json(farmer)))
}

/// Delete a farmer; their purchases are kept
pub async fn delete_farmer(
    State(state): State<AppState>,
    Path(farmer_id): Path<String>,
) -> StatusCode {
    let service = FarmerService::new(state.store.clone());
    service.delete_farmer(&farmer_id);
    StatusCode::NO_CONTENT
}

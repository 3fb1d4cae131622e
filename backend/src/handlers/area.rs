//! Planting area HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use shared::{NewArea, PlantingArea};

use crate::error::AppResult;
use crate::services::AreaService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

/// List planting areas
pub async fn list_areas(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<serde_json::Value> {
    let service = AreaService::new(state.store.clone());
    let areas = service.list_areas(query.search.as_deref());
    Json(serde_json::json!({ "areas": areas }))
}

/// Get a planting area
pub async fn get_area(
    State(state): State<AppState>,
    Path(area_id): Path<String>,
) -> AppResult<Json<PlantingArea>> {
    let service = AreaService::new(state.store.clone());
    Ok(Json(service.get_area(&area_id)?))
}

/// Register a planting area
pub async fn create_area(
    State(state): State<AppState>,
    Json(input): Json<NewArea>,
) -> AppResult<impl IntoResponse> {
    let service = AreaService::new(state.store.clone());
    let area = service.create_area(input)?;
    Ok((StatusCode::CREATED, Json(area)))
}

/// Delete a planting area; linked farmers are kept
pub async fn delete_area(
    State(state): State<AppState>,
    Path(area_id): Path<String>,
) -> StatusCode {
    let service = AreaService::new(state.store.clone());
    service.delete_area(&area_id);
    StatusCode::NO_CONTENT
}

//! Purchase HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use shared::{NewPurchase, PurchaseRecord};

use crate::error::AppResult;
use crate::services::PurchaseService;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    pub format: Option<String>, // "json" or "csv"
}

/// Purchase history, newest first
pub async fn list_purchases(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> AppResult<impl IntoResponse> {
    let service = PurchaseService::new(state.store.clone());
    let rows = service.list_history();

    if query.format.as_deref() == Some("csv") {
        let csv = PurchaseService::export_to_csv(&rows)?;
        Ok((
            [
                (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
                (header::CONTENT_DISPOSITION, "attachment; filename=\"purchases.csv\""),
            ],
            csv,
        )
            .into_response())
    } else {
        Ok(Json(serde_json::json!({ "purchases": rows })).into_response())
    }
}

/// Get a purchase record
pub async fn get_purchase(
    State(state): State<AppState>,
    Path(purchase_id): Path<String>,
) -> AppResult<Json<PurchaseRecord>> {
    let service = PurchaseService::new(state.store.clone());
    Ok(Json(service.get_purchase(&purchase_id)?))
}

/// Record a purchase
pub async fn create_purchase(
    State(state): State<AppState>,
    Json(input): Json<NewPurchase>,
) -> AppResult<impl IntoResponse> {
    let service = PurchaseService::new(state.store.clone());
    let record = service.record_purchase(input)?;
    Ok((StatusCode::CREATED, Json(record)))
}

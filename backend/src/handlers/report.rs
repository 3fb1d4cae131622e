//! AI report handlers

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub report_id: Uuid,
    pub report: String,
    pub generated_at: DateTime<Utc>,
}

/// Generate an AI analysis of the current data.
///
/// Only one report runs at a time; a second request while one is in flight
/// is rejected with 409.
pub async fn generate_report(
    State(state): State<AppState>,
    Json(request): Json<ReportRequest>,
) -> AppResult<Json<ReportResponse>> {
    let Some(_guard) = state.reports.slot().try_acquire() else {
        return Err(AppError::Conflict {
            resource: "report".to_string(),
            message: "A report is already being generated".to_string(),
            message_vi: "Đang phân tích, vui lòng đợi báo cáo trước hoàn tất".to_string(),
        });
    };

    let report_id = Uuid::new_v4();
    let data = state.store.snapshot();
    tracing::info!(%report_id, "Generating AI report");

    let report = state
        .reports
        .generate_report(&data, request.query.as_deref())
        .await;

    Ok(Json(ReportResponse {
        report_id,
        report,
        generated_at: Utc::now(),
    }))
}

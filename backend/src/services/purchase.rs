//! Purchase logging service
//!
//! Purchases can be recorded and listed; there is no way to remove one.

use std::sync::Arc;

use serde::Serialize;
use shared::{purchase_history_rows, NewPurchase, PurchaseRecord, PurchaseRow};

use crate::error::{AppError, AppResult};
use crate::store::AppStore;

/// Purchase service
#[derive(Clone)]
pub struct PurchaseService {
    store: Arc<AppStore>,
}

/// Flat purchase history line for CSV export
#[derive(Debug, Serialize)]
pub struct PurchaseCsvRow {
    pub date: String,
    pub farmer: String,
    pub weight_kg: String,
    pub price_per_kg: String,
    pub total_amount: String,
    pub quality: String,
    pub note: String,
}

impl From<&PurchaseRow> for PurchaseCsvRow {
    fn from(row: &PurchaseRow) -> Self {
        Self {
            date: row.date.clone(),
            farmer: row.farmer_name.clone(),
            weight_kg: row.weight.to_string(),
            price_per_kg: row.price_per_kg.to_string(),
            total_amount: row.total_amount.to_string(),
            quality: row.quality.to_string(),
            note: row.note.clone().unwrap_or_default(),
        }
    }
}

impl PurchaseService {
    pub fn new(store: Arc<AppStore>) -> Self {
        Self { store }
    }

    /// Purchase history, newest first. Sorted afresh on every call.
    pub fn list_history(&self) -> Vec<PurchaseRow> {
        purchase_history_rows(&self.store.snapshot())
    }

    pub fn get_purchase(&self, purchase_id: &str) -> AppResult<PurchaseRecord> {
        self.store
            .snapshot()
            .resolve_purchase(purchase_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Purchase".to_string()))
    }

    /// Validate the form, compute the total and append the purchase
    pub fn record_purchase(&self, input: NewPurchase) -> AppResult<PurchaseRecord> {
        let record = input.into_record()?;

        if self.store.snapshot().resolve_farmer(&record.farmer_id).is_none() {
            tracing::warn!(farmer_id = %record.farmer_id, "Purchase from unknown farmer");
        }

        self.store.update(|data| data.add_purchase(record.clone()));
        tracing::info!(
            purchase_id = %record.id,
            total_amount = %record.total_amount,
            "Purchase recorded"
        );
        Ok(record)
    }

    /// Export rows to CSV
    pub fn export_to_csv(rows: &[PurchaseRow]) -> AppResult<String> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        for row in rows {
            wtr.serialize(PurchaseCsvRow::from(row))
                .map_err(|e| AppError::Internal(format!("CSV serialization error: {}", e)))?;
        }
        let csv_data = String::from_utf8(
            wtr.into_inner()
                .map_err(|e| AppError::Internal(format!("CSV writer error: {}", e)))?,
        )
        .map_err(|e| AppError::Internal(format!("UTF-8 conversion error: {}", e)))?;
        Ok(csv_data)
    }
}

//! Purchase record models

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Quality;

/// Date format used by purchase records
pub const PURCHASE_DATE_FORMAT: &str = "%Y-%m-%d";

/// One buy transaction from a farmer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PurchaseRecord {
    pub id: String,
    /// Id of the selling `Farmer`; may dangle after the farmer is deleted
    pub farmer_id: String,
    /// Calendar date as `YYYY-MM-DD`, kept as entered
    pub date: String,
    /// Weight in kilograms
    pub weight: Decimal,
    /// Price in VND per kilogram
    pub price_per_kg: Decimal,
    /// `weight * price_per_kg`, fixed at creation
    pub total_amount: Decimal,
    pub quality: Quality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl PurchaseRecord {
    /// Build a record, computing `total_amount` from weight and price.
    ///
    /// A product beyond the decimal range saturates at `Decimal::MAX`; the
    /// purchase form rejects such amounts before they get here.
    pub fn new(
        id: impl Into<String>,
        farmer_id: impl Into<String>,
        date: impl Into<String>,
        weight: Decimal,
        price_per_kg: Decimal,
        quality: Quality,
        note: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            farmer_id: farmer_id.into(),
            date: date.into(),
            weight,
            price_per_kg,
            total_amount: weight.saturating_mul(price_per_kg),
            quality,
            note,
        }
    }

    /// Parse the purchase date; `None` when it is not a valid `YYYY-MM-DD` date
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), PURCHASE_DATE_FORMAT).ok()
    }
}

//! Display rows that resolve cross-collection references
//!
//! References are never assumed to exist: a farmer whose area was deleted is
//! shown as unlinked, a purchase whose farmer was deleted shows an unknown
//! farmer.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::dashboard::purchase_history;
use crate::models::{AppData, Farmer, PlantingArea};
use crate::types::Quality;

/// Farmer name shown when a purchase references a deleted farmer
pub const UNKNOWN_FARMER: &str = "Unknown";

/// Label shown when a farmer's area no longer exists
pub const UNLINKED_LABEL: &str = "Chưa liên kết";

/// Resolution of a farmer's `area_id`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AreaLink {
    Linked { area_id: String, code: String, name: String },
    Unlinked,
}

impl AreaLink {
    pub fn resolve(data: &AppData, area_id: &str) -> Self {
        match data.resolve_area(area_id) {
            Some(area) => AreaLink::Linked {
                area_id: area.id.clone(),
                code: area.code.clone(),
                name: area.name.clone(),
            },
            None => AreaLink::Unlinked,
        }
    }

    pub fn label(&self) -> String {
        match self {
            AreaLink::Linked { code, name, .. } => format!("{} ({})", name, code),
            AreaLink::Unlinked => UNLINKED_LABEL.to_string(),
        }
    }
}

/// A farmer as listed in the farmer table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FarmerRow {
    #[serde(flatten)]
    pub farmer: Farmer,
    pub area: AreaLink,
}

/// One line of the purchase history table
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PurchaseRow {
    pub id: String,
    pub date: String,
    pub farmer_id: String,
    pub farmer_name: String,
    pub weight: Decimal,
    pub price_per_kg: Decimal,
    pub total_amount: Decimal,
    pub quality: Quality,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

pub fn farmer_rows<'a>(data: &AppData, farmers: impl IntoIterator<Item = &'a Farmer>) -> Vec<FarmerRow> {
    farmers
        .into_iter()
        .map(|farmer| FarmerRow {
            area: AreaLink::resolve(data, &farmer.area_id),
            farmer: farmer.clone(),
        })
        .collect()
}

/// Purchase history, newest first, with farmer names resolved
pub fn purchase_history_rows(data: &AppData) -> Vec<PurchaseRow> {
    purchase_history(data)
        .into_iter()
        .map(|p| PurchaseRow {
            id: p.id.clone(),
            date: p.date.clone(),
            farmer_id: p.farmer_id.clone(),
            farmer_name: data
                .resolve_farmer(&p.farmer_id)
                .map(|f| f.name.clone())
                .unwrap_or_else(|| UNKNOWN_FARMER.to_string()),
            weight: p.weight,
            price_per_kg: p.price_per_kg,
            total_amount: p.total_amount,
            quality: p.quality,
            note: p.note.clone(),
        })
        .collect()
}

/// Areas whose name or code contains `term`, ignoring case
pub fn search_areas<'a>(data: &'a AppData, term: &str) -> Vec<&'a PlantingArea> {
    let term = term.trim().to_lowercase();
    data.areas
        .iter()
        .filter(|a| {
            a.name.to_lowercase().contains(&term) || a.code.to_lowercase().contains(&term)
        })
        .collect()
}

/// Farmers whose name contains `term`, ignoring case
pub fn search_farmers<'a>(data: &'a AppData, term: &str) -> Vec<&'a Farmer> {
    let term = term.trim().to_lowercase();
    data.farmers
        .iter()
        .filter(|f| f.name.to_lowercase().contains(&term))
        .collect()
}

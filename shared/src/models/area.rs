//! Planting area models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::AreaStatus;

/// A registered cultivation parcel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlantingArea {
    pub id: String,
    /// Business code such as `VN-DL-001`; not guaranteed unique
    pub code: String,
    pub name: String,
    pub location: String,
    /// Area in hectares
    pub area_size: Decimal,
    pub crop_type: String,
    pub status: AreaStatus,
}

impl PlantingArea {
    pub fn is_active(&self) -> bool {
        self.status == AreaStatus::Active
    }
}

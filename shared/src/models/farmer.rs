//! Farmer models

use serde::{Deserialize, Serialize};

/// A produce supplier linked to one planting area
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Farmer {
    pub id: String,
    pub name: String,
    pub phone: String,
    /// Id of the linked `PlantingArea`; may dangle after the area is deleted
    pub area_id: String,
}

//! Farmer service

use std::sync::Arc;

use shared::{farmer_rows, search_farmers, AreaLink, Farmer, FarmerRow, NewFarmer};

use crate::error::{AppError, AppResult};
use crate::store::AppStore;

/// Service for farmers and their area links
#[derive(Clone)]
pub struct FarmerService {
    store: Arc<AppStore>,
}

impl FarmerService {
    pub fn new(store: Arc<AppStore>) -> Self {
        Self { store }
    }

    /// Farmers with their area resolved, optionally filtered by name
    pub fn list_farmers(&self, search: Option<&str>) -> Vec<FarmerRow> {
        let data = self.store.snapshot();
        let matching = search_farmers(&data, search.unwrap_or_default());
        farmer_rows(&data, matching)
    }

    pub fn get_farmer(&self, farmer_id: &str) -> AppResult<FarmerRow> {
        let data = self.store.snapshot();
        let farmer = data
            .resolve_farmer(farmer_id)
            .ok_or_else(|| AppError::NotFound("Farmer".to_string()))?;
        Ok(FarmerRow {
            area: AreaLink::resolve(&data, &farmer.area_id),
            farmer: farmer.clone(),
        })
    }

    /// Validate the form and append the new farmer.
    ///
    /// The selected area is not required to exist.
    pub fn create_farmer(&self, input: NewFarmer) -> AppResult<Farmer> {
        let farmer = input.into_farmer()?;

        if self.store.snapshot().resolve_area(&farmer.area_id).is_none() {
            tracing::warn!(area_id = %farmer.area_id, "Farmer linked to unknown area");
        }

        self.store.update(|data| data.add_farmer(farmer.clone()));
        tracing::info!(farmer_id = %farmer.id, "Farmer created");
        Ok(farmer)
    }

    /// Remove a farmer; their purchases are kept
    pub fn delete_farmer(&self, farmer_id: &str) -> bool {
        let removed = self.store.update(|data| data.delete_farmer(farmer_id));
        if removed {
            tracing::info!(farmer_id, "Farmer deleted");
        } else {
            tracing::debug!(farmer_id, "Delete ignored, farmer not found");
        }
        removed
    }
}

//! Planting area service

use std::sync::Arc;

use shared::{search_areas, NewArea, PlantingArea};

use crate::error::{AppError, AppResult};
use crate::store::AppStore;

/// Service for registering and removing planting areas
#[derive(Clone)]
pub struct AreaService {
    store: Arc<AppStore>,
}

impl AreaService {
    pub fn new(store: Arc<AppStore>) -> Self {
        Self { store }
    }

    /// All areas in insertion order, optionally filtered by name or code
    pub fn list_areas(&self, search: Option<&str>) -> Vec<PlantingArea> {
        let data = self.store.snapshot();
        search_areas(&data, search.unwrap_or_default())
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn get_area(&self, area_id: &str) -> AppResult<PlantingArea> {
        self.store
            .snapshot()
            .resolve_area(area_id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Area".to_string()))
    }

    /// Validate the form and append the new area
    pub fn create_area(&self, input: NewArea) -> AppResult<PlantingArea> {
        let area = input.into_area()?;

        let duplicates = self
            .store
            .snapshot()
            .areas
            .iter()
            .filter(|a| a.code == area.code)
            .count();
        if duplicates > 0 {
            // codes are not required to be unique
            tracing::warn!(code = %area.code, "Area code already registered");
        }

        self.store.update(|data| data.add_area(area.clone()));
        tracing::info!(area_id = %area.id, code = %area.code, "Area created");
        Ok(area)
    }

    /// Remove an area; unknown ids are ignored and farmers stay linked to the old id
    pub fn delete_area(&self, area_id: &str) -> bool {
        let removed = self.store.update(|data| data.delete_area(area_id));
        if removed {
            tracing::info!(area_id, "Area deleted");
        } else {
            tracing::debug!(area_id, "Delete ignored, area not found");
        }
        removed
    }
}

//! The aggregate root holding every collection of the dashboard
//!
//! `AppData` is an immutable snapshot. Mutations return a new snapshot and
//! share untouched collections with the previous one, so observers can detect
//! change with [`AppData::ptr_eq`] instead of comparing contents.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{Farmer, PlantingArea, PurchaseRecord};

/// In-memory snapshot of areas, farmers and purchases
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppData {
    pub areas: Arc<Vec<PlantingArea>>,
    pub farmers: Arc<Vec<Farmer>>,
    pub purchases: Arc<Vec<PurchaseRecord>>,
}

impl AppData {
    pub fn new(
        areas: Vec<PlantingArea>,
        farmers: Vec<Farmer>,
        purchases: Vec<PurchaseRecord>,
    ) -> Self {
        Self {
            areas: Arc::new(areas),
            farmers: Arc::new(farmers),
            purchases: Arc::new(purchases),
        }
    }

    /// True when both snapshots share every collection
    pub fn ptr_eq(a: &AppData, b: &AppData) -> bool {
        Arc::ptr_eq(&a.areas, &b.areas)
            && Arc::ptr_eq(&a.farmers, &b.farmers)
            && Arc::ptr_eq(&a.purchases, &b.purchases)
    }

    // ------------------------------------------------------------------------
    // Mutation surface
    // ------------------------------------------------------------------------

    /// Append an area. The caller has validated it and generated its id.
    pub fn add_area(&self, area: PlantingArea) -> AppData {
        Self {
            areas: appended(&self.areas, area),
            ..self.clone()
        }
    }

    /// Append a farmer. `area_id` is not checked against the areas.
    pub fn add_farmer(&self, farmer: Farmer) -> AppData {
        Self {
            farmers: appended(&self.farmers, farmer),
            ..self.clone()
        }
    }

    /// Append a purchase. The caller has already computed `total_amount`.
    pub fn add_purchase(&self, record: PurchaseRecord) -> AppData {
        Self {
            purchases: appended(&self.purchases, record),
            ..self.clone()
        }
    }

    /// Remove the area with `id`. Farmers linked to it are left in place.
    pub fn delete_area(&self, id: &str) -> AppData {
        Self {
            areas: without(&self.areas, |a| a.id == id),
            ..self.clone()
        }
    }

    /// Remove the farmer with `id`. Purchases from the farmer are left in place.
    pub fn delete_farmer(&self, id: &str) -> AppData {
        Self {
            farmers: without(&self.farmers, |f| f.id == id),
            ..self.clone()
        }
    }

    // ------------------------------------------------------------------------
    // Reference resolution
    // ------------------------------------------------------------------------

    pub fn resolve_area(&self, id: &str) -> Option<&PlantingArea> {
        self.areas.iter().find(|a| a.id == id)
    }

    pub fn resolve_farmer(&self, id: &str) -> Option<&Farmer> {
        self.farmers.iter().find(|f| f.id == id)
    }

    pub fn resolve_purchase(&self, id: &str) -> Option<&PurchaseRecord> {
        self.purchases.iter().find(|p| p.id == id)
    }
}

fn appended<T: Clone>(items: &Arc<Vec<T>>, item: T) -> Arc<Vec<T>> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend(items.iter().cloned());
    next.push(item);
    Arc::new(next)
}

/// Drop matching items; returns the same `Arc` when nothing matches
fn without<T: Clone>(items: &Arc<Vec<T>>, matches: impl Fn(&T) -> bool) -> Arc<Vec<T>> {
    if !items.iter().any(&matches) {
        return Arc::clone(items);
    }
    Arc::new(items.iter().filter(|item| !matches(*item)).cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AreaStatus, Quality};
    use rust_decimal::Decimal;

    fn area(id: &str) -> PlantingArea {
        PlantingArea {
            id: id.to_string(),
            code: format!("VN-DL-{}", id),
            name: format!("Vùng {}", id),
            location: "Lâm Đồng".to_string(),
            area_size: Decimal::from(10),
            crop_type: "Cà phê".to_string(),
            status: AreaStatus::Active,
        }
    }

    fn farmer(id: &str, area_id: &str) -> Farmer {
        Farmer {
            id: id.to_string(),
            name: format!("Farmer {}", id),
            phone: "0912345678".to_string(),
            area_id: area_id.to_string(),
        }
    }

    #[test]
    fn test_add_returns_new_snapshot() {
        let before = AppData::default();
        let after = before.add_area(area("1"));

        assert!(before.areas.is_empty());
        assert_eq!(after.areas.len(), 1);
        assert!(!AppData::ptr_eq(&before, &after));
        // untouched collections are shared
        assert!(Arc::ptr_eq(&before.farmers, &after.farmers));
        assert!(Arc::ptr_eq(&before.purchases, &after.purchases));
    }

    #[test]
    fn test_delete_area_does_not_cascade() {
        let data = AppData::default()
            .add_area(area("1"))
            .add_farmer(farmer("f1", "1"));

        let after = data.delete_area("1");
        assert!(after.areas.is_empty());
        assert_eq!(after.farmers.len(), 1);
        assert!(after.resolve_area(&after.farmers[0].area_id).is_none());
    }

    #[test]
    fn test_delete_missing_id_is_noop() {
        let data = AppData::default().add_area(area("1"));
        let after = data.delete_area("missing");
        assert!(AppData::ptr_eq(&data, &after));

        let after = data.delete_farmer("missing");
        assert!(AppData::ptr_eq(&data, &after));
    }

    #[test]
    fn test_delete_farmer_keeps_purchases() {
        let record = PurchaseRecord::new(
            "p1",
            "f1",
            "2023-10-15",
            Decimal::from(500),
            Decimal::from(80000),
            Quality::A,
            None,
        );
        let data = AppData::default()
            .add_farmer(farmer("f1", "1"))
            .add_purchase(record);

        let after = data.delete_farmer("f1");
        assert!(after.farmers.is_empty());
        assert_eq!(after.purchases.len(), 1);
        assert!(Arc::ptr_eq(&data.purchases, &after.purchases));
    }

    #[test]
    fn test_resolve() {
        let data = AppData::default()
            .add_area(area("1"))
            .add_farmer(farmer("f1", "1"));
        assert_eq!(data.resolve_area("1").map(|a| a.code.as_str()), Some("VN-DL-1"));
        assert!(data.resolve_farmer("f2").is_none());
    }
}

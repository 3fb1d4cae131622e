//! Startup snapshot loaded when the session begins

use rust_decimal::Decimal;

use crate::models::{AppData, Farmer, PlantingArea, PurchaseRecord};
use crate::types::{AreaStatus, Quality};

fn area(id: &str, code: &str, name: &str, location: &str, size: Decimal, crop: &str) -> PlantingArea {
    PlantingArea {
        id: id.to_string(),
        code: code.to_string(),
        name: name.to_string(),
        location: location.to_string(),
        area_size: size,
        crop_type: crop.to_string(),
        status: AreaStatus::Active,
    }
}

fn farmer(id: &str, name: &str, phone: &str, area_id: &str) -> Farmer {
    Farmer {
        id: id.to_string(),
        name: name.to_string(),
        phone: phone.to_string(),
        area_id: area_id.to_string(),
    }
}

impl AppData {
    /// The fixed demo data set: three Lâm Đồng areas, three farmers, four purchases
    pub fn seed() -> Self {
        let areas = vec![
            area("1", "VN-DL-001", "Vùng Đạ Huoai A", "Đạ Huoai, Lâm Đồng", Decimal::new(155, 1), "Sầu riêng"),
            area("2", "VN-DL-002", "Vùng Bảo Lộc B", "Bảo Lộc, Lâm Đồng", Decimal::new(82, 1), "Cà phê"),
            area("3", "VN-DL-003", "Vùng Di Linh C", "Di Linh, Lâm Đồng", Decimal::from(12), "Sầu riêng"),
        ];

        let farmers = vec![
            farmer("f1", "Nguyễn Văn A", "0912345678", "1"),
            farmer("f2", "Trần Thị B", "0987654321", "1"),
            farmer("f3", "Lê Văn C", "0909090909", "2"),
        ];

        let purchases = vec![
            PurchaseRecord::new("p1", "f1", "2023-10-15", Decimal::from(500), Decimal::from(80_000), Quality::A, None),
            PurchaseRecord::new("p2", "f2", "2023-10-16", Decimal::from(300), Decimal::from(75_000), Quality::B, None),
            PurchaseRecord::new("p3", "f1", "2023-10-20", Decimal::from(600), Decimal::from(82_000), Quality::A, None),
            PurchaseRecord::new(
                "p4",
                "f3",
                "2023-11-05",
                Decimal::from(1000),
                Decimal::from(45_000),
                Quality::A,
                Some("Cà phê tươi".to_string()),
            ),
        ];

        AppData::new(areas, farmers, purchases)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_totals() {
        let data = AppData::seed();
        assert_eq!(data.areas.len(), 3);
        assert_eq!(data.farmers.len(), 3);
        assert_eq!(data.purchases.len(), 4);

        let totals: Vec<Decimal> = data.purchases.iter().map(|p| p.total_amount).collect();
        assert_eq!(
            totals,
            vec![
                Decimal::from(40_000_000),
                Decimal::from(22_500_000),
                Decimal::from(49_200_000),
                Decimal::from(45_000_000),
            ]
        );
    }
}

//! Form-layer validation and record construction
//!
//! The mutation surface on `AppData` accepts whatever it is given. These
//! inputs are what the create forms submit: they check required fields,
//! apply the form defaults, generate ids and compute purchase totals before
//! anything reaches the aggregate.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Farmer, PlantingArea, PurchaseRecord, PURCHASE_DATE_FORMAT};
use crate::types::{AreaStatus, Quality};

/// Crop type preselected in the new-area form
pub const DEFAULT_CROP_TYPE: &str = "Sầu riêng";

/// Crop type stored when the form is submitted with the crop left blank
pub const FALLBACK_CROP_TYPE: &str = "Khác";

/// A rejected form field
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub message_vi: String,
}

impl ValidationError {
    pub fn new(field: &str, message: impl Into<String>, message_vi: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
            message_vi: message_vi.into(),
        }
    }
}

// ============================================================================
// Field checks
// ============================================================================

/// Require a non-blank text field
pub fn validate_required(field: &str, value: Option<&str>) -> Result<String, ValidationError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(ValidationError::new(
            field,
            format!("{} is required", field),
            format!("Vui lòng nhập {}", field),
        )),
    }
}

/// Require a quantity that is present and strictly positive
pub fn validate_positive(field: &str, value: Option<Decimal>) -> Result<Decimal, ValidationError> {
    match value {
        Some(v) if v > Decimal::ZERO => Ok(v),
        Some(_) => Err(ValidationError::new(
            field,
            format!("{} must be greater than 0", field),
            format!("{} phải lớn hơn 0", field),
        )),
        None => Err(ValidationError::new(
            field,
            format!("{} is required", field),
            format!("Vui lòng nhập {}", field),
        )),
    }
}

/// Reject negative quantities; a missing value counts as zero
pub fn validate_non_negative(field: &str, value: Option<Decimal>) -> Result<Decimal, ValidationError> {
    let v = value.unwrap_or(Decimal::ZERO);
    if v < Decimal::ZERO {
        return Err(ValidationError::new(
            field,
            format!("{} cannot be negative", field),
            format!("{} không được âm", field),
        ));
    }
    Ok(v)
}

/// Check a purchase date is a real `YYYY-MM-DD` calendar date
pub fn validate_purchase_date(date: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(date.trim(), PURCHASE_DATE_FORMAT).map_err(|_| {
        ValidationError::new(
            "date",
            "date must be formatted as YYYY-MM-DD",
            "Ngày thu mua phải có dạng YYYY-MM-DD",
        )
    })
}

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// ============================================================================
// Create-form inputs
// ============================================================================

/// New planting area form; an omitted crop type takes the form preset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NewArea {
    pub code: Option<String>,
    pub name: Option<String>,
    pub location: Option<String>,
    pub area_size: Option<Decimal>,
    pub crop_type: Option<String>,
}

impl Default for NewArea {
    fn default() -> Self {
        Self {
            code: None,
            name: None,
            location: None,
            area_size: None,
            crop_type: Some(DEFAULT_CROP_TYPE.to_string()),
        }
    }
}

impl NewArea {
    pub fn into_area(self) -> Result<PlantingArea, ValidationError> {
        let code = validate_required("code", self.code.as_deref())?;
        let name = validate_required("name", self.name.as_deref())?;
        let location = validate_required("location", self.location.as_deref())?;
        let area_size = validate_non_negative("area_size", self.area_size)?;
        let crop_type = self
            .crop_type
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| FALLBACK_CROP_TYPE.to_string());

        Ok(PlantingArea {
            id: new_id(),
            code,
            name,
            location,
            area_size,
            crop_type,
            status: AreaStatus::Active,
        })
    }
}

/// New farmer form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewFarmer {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub area_id: Option<String>,
}

impl NewFarmer {
    /// The area id is only required to be filled in; it is not looked up
    pub fn into_farmer(self) -> Result<Farmer, ValidationError> {
        Ok(Farmer {
            id: new_id(),
            name: validate_required("name", self.name.as_deref())?,
            phone: validate_required("phone", self.phone.as_deref())?,
            area_id: validate_required("area_id", self.area_id.as_deref())?,
        })
    }
}

/// New purchase form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewPurchase {
    pub farmer_id: Option<String>,
    /// Defaults to today when omitted
    pub date: Option<String>,
    pub weight: Option<Decimal>,
    pub price_per_kg: Option<Decimal>,
    /// Defaults to grade A when omitted
    pub quality: Option<Quality>,
    pub note: Option<String>,
}

impl NewPurchase {
    pub fn into_record(self) -> Result<PurchaseRecord, ValidationError> {
        let farmer_id = validate_required("farmer_id", self.farmer_id.as_deref())?;
        let weight = validate_positive("weight", self.weight)?;
        let price_per_kg = validate_positive("price_per_kg", self.price_per_kg)?;
        if weight.checked_mul(price_per_kg).is_none() {
            return Err(ValidationError::new(
                "total_amount",
                "weight times price_per_kg is too large",
                "Thành tiền vượt quá giới hạn cho phép",
            ));
        }
        let quality = match self.quality.unwrap_or_default() {
            Quality::Unknown => {
                return Err(ValidationError::new(
                    "quality",
                    "quality must be one of A, B, C",
                    "Chất lượng phải là Loại A, B hoặc C",
                ))
            }
            quality => quality,
        };
        let date = match self.date {
            Some(d) => validate_purchase_date(&d)?,
            None => Utc::now().date_naive(),
        };
        let note = self
            .note
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty());

        Ok(PurchaseRecord::new(
            new_id(),
            farmer_id,
            date.format(PURCHASE_DATE_FORMAT).to_string(),
            weight,
            price_per_kg,
            quality,
            note,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========================================================================
    // Field checks
    // ========================================================================

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required("name", Some(" Vùng A ")), Ok("Vùng A".to_string()));
        assert!(validate_required("name", Some("   ")).is_err());
        assert!(validate_required("name", None).is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("weight", Some(Decimal::from(5))).is_ok());
        assert!(validate_positive("weight", Some(Decimal::ZERO)).is_err());
        assert!(validate_positive("weight", None).is_err());
    }

    #[test]
    fn test_validate_non_negative_defaults_to_zero() {
        assert_eq!(validate_non_negative("area_size", None), Ok(Decimal::ZERO));
        assert!(validate_non_negative("area_size", Some(Decimal::from(-1))).is_err());
    }

    #[test]
    fn test_validate_purchase_date() {
        assert!(validate_purchase_date("2023-10-15").is_ok());
        assert!(validate_purchase_date("2023-02-30").is_err());
        assert!(validate_purchase_date("15/10/2023").is_err());
    }

    // ========================================================================
    // Forms
    // ========================================================================

    #[test]
    fn test_new_area_defaults() {
        let area = NewArea {
            code: Some("VN-DL-004".to_string()),
            name: Some("Vùng Lâm Hà D".to_string()),
            location: Some("Lâm Hà, Lâm Đồng".to_string()),
            area_size: None,
            crop_type: Some("".to_string()),
        }
        .into_area()
        .unwrap();

        assert_eq!(area.area_size, Decimal::ZERO);
        assert_eq!(area.crop_type, FALLBACK_CROP_TYPE);
        assert_eq!(area.status, AreaStatus::Active);
        assert!(Uuid::parse_str(&area.id).is_ok());
    }

    #[test]
    fn test_new_area_missing_location() {
        let err = NewArea {
            code: Some("VN-DL-004".to_string()),
            name: Some("Vùng D".to_string()),
            ..Default::default()
        }
        .into_area()
        .unwrap_err();
        assert_eq!(err.field, "location");
    }

    #[test]
    fn test_new_area_form_preselects_crop() {
        let area = NewArea {
            code: Some("VN-DL-005".to_string()),
            name: Some("Vùng E".to_string()),
            location: Some("Đơn Dương".to_string()),
            ..Default::default()
        }
        .into_area()
        .unwrap();
        assert_eq!(area.crop_type, DEFAULT_CROP_TYPE);
    }

    #[test]
    fn test_new_farmer_requires_area() {
        let err = NewFarmer {
            name: Some("Phạm Văn D".to_string()),
            phone: Some("0900000000".to_string()),
            area_id: None,
        }
        .into_farmer()
        .unwrap_err();
        assert_eq!(err.field, "area_id");
    }

    #[test]
    fn test_new_farmer_accepts_unknown_area() {
        let farmer = NewFarmer {
            name: Some("Phạm Văn D".to_string()),
            phone: Some("0900000000".to_string()),
            area_id: Some("no-such-area".to_string()),
        }
        .into_farmer()
        .unwrap();
        assert_eq!(farmer.area_id, "no-such-area");
    }

    #[test]
    fn test_new_purchase_computes_total() {
        let record = NewPurchase {
            farmer_id: Some("f1".to_string()),
            date: Some("2023-12-01".to_string()),
            weight: Some(Decimal::new(2505, 1)),
            price_per_kg: Some(Decimal::from(80_000)),
            quality: Some(Quality::B),
            note: Some("  ".to_string()),
        }
        .into_record()
        .unwrap();

        assert_eq!(record.total_amount, Decimal::from(20_040_000));
        assert_eq!(record.total_amount, record.weight * record.price_per_kg);
        assert_eq!(record.quality, Quality::B);
        assert_eq!(record.note, None);
    }

    #[test]
    fn test_new_purchase_defaults() {
        let record = NewPurchase {
            farmer_id: Some("f1".to_string()),
            weight: Some(Decimal::from(10)),
            price_per_kg: Some(Decimal::from(1000)),
            ..Default::default()
        }
        .into_record()
        .unwrap();

        assert_eq!(record.quality, Quality::A);
        assert!(record.parsed_date().is_some());
    }

    #[test]
    fn test_new_purchase_rejects_zero_weight() {
        let err = NewPurchase {
            farmer_id: Some("f1".to_string()),
            weight: Some(Decimal::ZERO),
            price_per_kg: Some(Decimal::from(1000)),
            ..Default::default()
        }
        .into_record()
        .unwrap_err();
        assert_eq!(err.field, "weight");
    }

    #[test]
    fn test_new_purchase_rejects_overflowing_total() {
        let huge = Decimal::from_i128_with_scale(10i128.pow(20), 0);
        let err = NewPurchase {
            farmer_id: Some("f1".to_string()),
            weight: Some(huge),
            price_per_kg: Some(huge),
            ..Default::default()
        }
        .into_record()
        .unwrap_err();
        assert_eq!(err.field, "total_amount");
    }

    #[test]
    fn test_new_purchase_rejects_unknown_grade() {
        let form: NewPurchase = serde_json::from_str(
            r#"{"farmer_id":"f1","weight":"10","price_per_kg":"1000","quality":"D"}"#,
        )
        .unwrap();
        assert_eq!(form.into_record().unwrap_err().field, "quality");
    }
}

//! WebAssembly module for the Hoa Cương traceability dashboard
//!
//! Provides client-side computation for:
//! - Dashboard aggregates over a data snapshot
//! - Purchase history ordering
//! - Purchase totals
//! - Offline form validation

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::log_1(&JsValue::from_str("agri-trace wasm loaded"));
}

fn parse_snapshot(data_json: &str) -> Result<AppData, String> {
    serde_json::from_str(data_json).map_err(|e| format!("Invalid data JSON: {}", e))
}

fn to_json<T: Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

fn dashboard_json(data_json: &str) -> Result<String, String> {
    let data = parse_snapshot(data_json)?;
    to_json(&shared::dashboard(&data))
}

fn history_json(data_json: &str) -> Result<String, String> {
    let data = parse_snapshot(data_json)?;
    to_json(&shared::purchase_history_rows(&data))
}

/// Validation outcome handed back to the form
#[derive(Debug, Serialize)]
struct FormCheck {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ValidationError>,
}

impl<T> From<Result<T, ValidationError>> for FormCheck {
    fn from(result: Result<T, ValidationError>) -> Self {
        match result {
            Ok(_) => Self { valid: true, error: None },
            Err(e) => Self { valid: false, error: Some(e) },
        }
    }
}

fn purchase_form_json(form_json: &str) -> Result<String, String> {
    let form: NewPurchase =
        serde_json::from_str(form_json).map_err(|e| format!("Invalid form JSON: {}", e))?;
    to_json(&FormCheck::from(form.into_record()))
}

/// Compute stats, quality distribution and monthly volume for a snapshot
#[wasm_bindgen]
pub fn compute_dashboard(data_json: &str) -> Result<String, JsValue> {
    dashboard_json(data_json).map_err(|e| JsValue::from_str(&e))
}

/// Purchase history rows, newest first, with farmer names resolved
#[wasm_bindgen]
pub fn sort_purchase_history(data_json: &str) -> Result<String, JsValue> {
    history_json(data_json).map_err(|e| JsValue::from_str(&e))
}

/// Check a purchase form before submitting it
#[wasm_bindgen]
pub fn validate_purchase_form(form_json: &str) -> Result<String, JsValue> {
    purchase_form_json(form_json).map_err(|e| JsValue::from_str(&e))
}

/// Live total shown while the purchase form is filled in
#[wasm_bindgen]
pub fn calculate_purchase_total(weight: f64, price_per_kg: f64) -> f64 {
    let exact = Decimal::try_from(weight)
        .and_then(|w| Decimal::try_from(price_per_kg).map(|p| (w, p)))
        .ok()
        .and_then(|(w, p)| w.checked_mul(p))
        .and_then(|total| total.to_f64());
    // beyond the decimal range, fall back to float arithmetic
    exact.unwrap_or(weight * price_per_kg)
}

/// Month bucket ("YYYY-MM") for a purchase date
#[wasm_bindgen]
pub fn month_key(date: &str) -> String {
    shared::month_key(date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn seed_json() -> String {
        serde_json::to_string(&AppData::seed()).unwrap()
    }

    #[test]
    fn test_compute_dashboard() {
        let summary: Value = serde_json::from_str(&dashboard_json(&seed_json()).unwrap()).unwrap();
        assert_eq!(summary["stats"]["total_farmers"], 3);
        assert_eq!(summary["stats"]["total_spent"], "156700000");
        assert_eq!(summary["quality_distribution"][0]["count"], 3);
    }

    #[test]
    fn test_history_order() {
        let rows: Value = serde_json::from_str(&history_json(&seed_json()).unwrap()).unwrap();
        let dates: Vec<&str> = rows
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["date"].as_str().unwrap())
            .collect();
        assert_eq!(dates, vec!["2023-11-05", "2023-10-20", "2023-10-16", "2023-10-15"]);
    }

    #[test]
    fn test_invalid_snapshot() {
        assert!(dashboard_json("not json").is_err());
    }

    #[test]
    fn test_purchase_form_check() {
        let ok: Value = serde_json::from_str(
            &purchase_form_json(r#"{"farmer_id":"f1","weight":"10","price_per_kg":"5000"}"#).unwrap(),
        )
        .unwrap();
        assert_eq!(ok["valid"], true);

        let missing: Value =
            serde_json::from_str(&purchase_form_json(r#"{"farmer_id":"f1"}"#).unwrap()).unwrap();
        assert_eq!(missing["valid"], false);
        assert_eq!(missing["error"]["field"], "weight");
    }

    #[test]
    fn test_purchase_total() {
        assert!((calculate_purchase_total(500.0, 80000.0) - 40_000_000.0).abs() < 0.001);
        assert!((calculate_purchase_total(2.5, 1000.0) - 2500.0).abs() < 0.001);
    }

    #[test]
    fn test_purchase_total_out_of_decimal_range() {
        let total = calculate_purchase_total(1e20, 1e20);
        assert!((total / 1e40 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_dashboard_skips_unknown_grade() {
        let data = r#"{"areas":[],"farmers":[],"purchases":[
            {"id":"p1","farmer_id":"f1","date":"2023-10-15","weight":"5","price_per_kg":"1","total_amount":"5","quality":"A"},
            {"id":"p2","farmer_id":"f1","date":"2023-10-16","weight":"5","price_per_kg":"1","total_amount":"5","quality":"D"},
            {"id":"p3","farmer_id":"f1","date":"2023-10-17","weight":"5","price_per_kg":"1","total_amount":"5","quality":"B"}
        ]}"#;
        let summary: Value = serde_json::from_str(&dashboard_json(data).unwrap()).unwrap();
        let counts: Vec<u64> = summary["quality_distribution"]
            .as_array()
            .unwrap()
            .iter()
            .map(|b| b["count"].as_u64().unwrap())
            .collect();
        assert_eq!(counts, vec![1, 1, 0]);
        assert_eq!(summary["stats"]["total_volume"], "15");
    }

    #[test]
    fn test_month_key() {
        assert_eq!(month_key("2023-10-15"), "2023-10");
        assert_eq!(month_key("2023"), "2023");
    }
}

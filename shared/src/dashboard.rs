//! Dashboard computations over an `AppData` snapshot
//!
//! Every function here is pure: same snapshot in, same aggregates out.

use std::cmp::Ordering;
use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AppData, PurchaseRecord};
use crate::types::Quality;

/// Number of leading characters of a purchase date used as its month key
pub const MONTH_KEY_LEN: usize = 7;

/// Headline numbers shown on the dashboard cards
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SummaryStats {
    pub total_areas: usize,
    pub total_farmers: usize,
    /// Sum of purchased weight in kg
    pub total_volume: Decimal,
    /// Sum of purchase totals in VND
    pub total_spent: Decimal,
}

/// Purchase count for one quality grade
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QualityBucket {
    pub quality: Quality,
    pub label: String,
    pub count: usize,
}

/// Purchased weight for one `YYYY-MM` month key
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MonthlyVolume {
    pub month: String,
    pub weight: Decimal,
}

/// Everything the dashboard view needs
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DashboardSummary {
    pub stats: SummaryStats,
    pub quality_distribution: Vec<QualityBucket>,
    pub monthly_volume: Vec<MonthlyVolume>,
}

/// Sum that stops at `Decimal::MAX` instead of overflowing
fn saturating_sum(values: impl Iterator<Item = Decimal>) -> Decimal {
    values.fold(Decimal::ZERO, Decimal::saturating_add)
}

pub fn summary_stats(data: &AppData) -> SummaryStats {
    SummaryStats {
        total_areas: data.areas.len(),
        total_farmers: data.farmers.len(),
        total_volume: saturating_sum(data.purchases.iter().map(|p| p.weight)),
        total_spent: saturating_sum(data.purchases.iter().map(|p| p.total_amount)),
    }
}

/// Count purchases per grade, always returning the buckets A, B, C in order.
/// Purchases with an unrecognized grade are left out of every bucket.
pub fn quality_distribution(data: &AppData) -> Vec<QualityBucket> {
    Quality::ALL
        .iter()
        .map(|quality| QualityBucket {
            quality: *quality,
            label: quality.label(),
            count: data
                .purchases
                .iter()
                .filter(|p| p.quality == *quality)
                .count(),
        })
        .collect()
}

/// Month key of a purchase date: its first seven characters, unparsed.
///
/// `"2023-10-15"` gives `"2023-10"`; a malformed `"2023-1"` stays `"2023-1"`.
pub fn month_key(date: &str) -> String {
    date.chars().take(MONTH_KEY_LEN).collect()
}

/// Sum purchased weight per month key.
///
/// Groups appear in the order their month was first seen in the purchase
/// collection, not in calendar order.
pub fn monthly_volume(data: &AppData) -> Vec<MonthlyVolume> {
    let mut groups: Vec<MonthlyVolume> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for purchase in data.purchases.iter() {
        let month = month_key(&purchase.date);
        match index.get(&month) {
            Some(&i) => {
                if let Some(group) = groups.get_mut(i) {
                    group.weight = group.weight.saturating_add(purchase.weight);
                }
            }
            None => {
                index.insert(month.clone(), groups.len());
                groups.push(MonthlyVolume {
                    month,
                    weight: purchase.weight,
                });
            }
        }
    }

    groups
}

pub fn dashboard(data: &AppData) -> DashboardSummary {
    DashboardSummary {
        stats: summary_stats(data),
        quality_distribution: quality_distribution(data),
        monthly_volume: monthly_volume(data),
    }
}

/// Purchases ordered newest first by calendar date.
///
/// The sort is stable, so purchases on the same date keep their insertion
/// order. Dates that do not parse sort after all valid dates. The result is
/// rebuilt on every call.
pub fn purchase_history(data: &AppData) -> Vec<&PurchaseRecord> {
    let mut history: Vec<&PurchaseRecord> = data.purchases.iter().collect();
    history.sort_by(|a, b| compare_newest_first(a, b));
    history
}

fn compare_newest_first(a: &PurchaseRecord, b: &PurchaseRecord) -> Ordering {
    match (a.parsed_date(), b.parsed_date()) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

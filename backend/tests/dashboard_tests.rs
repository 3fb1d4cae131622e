//! Dashboard aggregate tests
//!
//! Tests for derived views including:
//! - Summary totals match the purchase collection
//! - Quality buckets always list A, B, C and sum to the purchase count
//! - Monthly volume groups by the first seven characters of the date

use proptest::prelude::*;
use rust_decimal::Decimal;
use shared::{
    dashboard, monthly_volume, quality_distribution, summary_stats, AppData, PurchaseRecord,
    Quality,
};

fn purchase(id: usize, date: &str, weight: u32, quality: Quality) -> PurchaseRecord {
    PurchaseRecord::new(
        format!("p{}", id),
        "f1",
        date,
        Decimal::from(weight),
        Decimal::from(1000),
        quality,
        None,
    )
}

fn purchase_strategy() -> impl Strategy<Value = (String, u32, Quality)> {
    (
        (2022u32..2025, 1u32..13, 1u32..29).prop_map(|(y, m, d)| format!("{}-{:02}-{:02}", y, m, d)),
        1u32..5000,
        prop_oneof![Just(Quality::A), Just(Quality::B), Just(Quality::C)],
    )
}

fn snapshot(entries: &[(String, u32, Quality)]) -> AppData {
    let purchases = entries
        .iter()
        .enumerate()
        .map(|(i, (date, weight, quality))| purchase(i, date, *weight, *quality))
        .collect();
    AppData::new(vec![], vec![], purchases)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_quality_buckets_cover_purchases(entries in prop::collection::vec(purchase_strategy(), 0..30)) {
        let buckets = quality_distribution(&snapshot(&entries));
        let grades: Vec<Quality> = buckets.iter().map(|b| b.quality).collect();

        prop_assert_eq!(grades, Quality::ALL.to_vec());
        prop_assert_eq!(buckets.iter().map(|b| b.count).sum::<usize>(), entries.len());
    }

    #[test]
    fn test_monthly_volume_matches_total(entries in prop::collection::vec(purchase_strategy(), 0..30)) {
        let data = snapshot(&entries);
        let months = monthly_volume(&data);
        let total: Decimal = months.iter().map(|m| m.weight).sum();

        prop_assert_eq!(total, summary_stats(&data).total_volume);
        prop_assert!(months.iter().all(|m| m.month.len() == 7));
    }

    #[test]
    fn test_spent_is_sum_of_totals(entries in prop::collection::vec(purchase_strategy(), 0..30)) {
        let data = snapshot(&entries);
        let expected: Decimal = entries
            .iter()
            .map(|(_, w, _)| Decimal::from(*w) * Decimal::from(1000))
            .sum();
        prop_assert_eq!(summary_stats(&data).total_spent, expected);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_empty_snapshot() {
        let summary = dashboard(&AppData::default());
        assert_eq!(summary.stats.total_volume, Decimal::ZERO);
        assert_eq!(summary.stats.total_spent, Decimal::ZERO);
        assert!(summary.quality_distribution.iter().all(|b| b.count == 0));
        assert!(summary.monthly_volume.is_empty());
    }

    #[test]
    fn test_months_in_first_seen_order() {
        let data = snapshot(&[
            ("2023-12-01".to_string(), 10, Quality::A),
            ("2023-10-05".to_string(), 20, Quality::B),
            ("2023-12-20".to_string(), 30, Quality::C),
        ]);
        let months: Vec<(String, Decimal)> = monthly_volume(&data)
            .into_iter()
            .map(|m| (m.month, m.weight))
            .collect();
        assert_eq!(
            months,
            vec![
                ("2023-12".to_string(), Decimal::from(40)),
                ("2023-10".to_string(), Decimal::from(20)),
            ]
        );
    }

    #[test]
    fn test_seed_quality_distribution() {
        let counts: Vec<usize> = quality_distribution(&AppData::seed())
            .into_iter()
            .map(|b| b.count)
            .collect();
        assert_eq!(counts, vec![3, 1, 0]);
    }

    #[test]
    fn test_seed_labels() {
        let labels: Vec<String> = quality_distribution(&AppData::seed())
            .into_iter()
            .map(|b| b.label)
            .collect();
        assert_eq!(labels, vec!["Loại A", "Loại B", "Loại C"]);
    }
}

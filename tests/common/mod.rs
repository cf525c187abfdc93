#![allow(dead_code)]

use pulsewrap_core::domain::{CategorySpendRecord, KpiDailyRecord};

/// The three-day sample used across the suite; cash balance only on the last day.
pub fn sample_daily() -> Vec<KpiDailyRecord> {
    vec![
        KpiDailyRecord::new("2025-11-01", 1200.0, 700.0, 95, 10),
        KpiDailyRecord::new("2025-11-02", 900.0, 650.0, 102, 14),
        KpiDailyRecord::new("2025-11-03", 1600.0, 720.0, 120, 18).with_cash_balance(9130.0),
    ]
}

pub fn sample_spend() -> Vec<CategorySpendRecord> {
    vec![
        CategorySpendRecord::new("2025-11-01", "Ads", 120.0),
        CategorySpendRecord::new("2025-11-01", "Cloud", 90.0),
        CategorySpendRecord::new("2025-11-02", "Ads", 140.0),
    ]
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

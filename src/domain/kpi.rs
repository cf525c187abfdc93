use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::dates::parse_iso_date;

/// One calendar day of business metrics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KpiDailyRecord {
    pub date: String,
    pub revenue: f64,
    pub expenses: f64,
    pub active_users: i64,
    pub new_users: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_balance: Option<f64>,
}

impl KpiDailyRecord {
    pub fn new(
        date: impl Into<String>,
        revenue: f64,
        expenses: f64,
        active_users: i64,
        new_users: i64,
    ) -> Self {
        Self {
            date: date.into(),
            revenue,
            expenses,
            active_users,
            new_users,
            cash_balance: None,
        }
    }

    pub fn with_cash_balance(mut self, cash_balance: f64) -> Self {
        self.cash_balance = Some(cash_balance);
        self
    }

    /// Calendar date of the record, if `date` is a strict `YYYY-MM-DD` string.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        parse_iso_date(&self.date)
    }
}

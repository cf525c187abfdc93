use serde::{Deserialize, Serialize};

/// Money spent in one category on one day. Dates and categories may repeat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySpendRecord {
    pub date: String,
    pub category: String,
    pub amount: f64,
}

impl CategorySpendRecord {
    pub fn new(date: impl Into<String>, category: impl Into<String>, amount: f64) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
        }
    }
}

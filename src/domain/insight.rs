use serde::{Deserialize, Serialize};

/// Closed catalog of insights the engine can emit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InsightKind {
    TotalRevenue,
    TotalExpenses,
    NetProfit,
    BestRevenueDay,
    HighestExpenseDay,
    AvgActiveUsers,
    PeakNewUsersDay,
    BiggestRevenueSpike,
    BurnRate,
    RunwayDays,
    TopSpendCategory,
    /// Marks the synthetic insight returned when no record has a usable date.
    DataError,
}

/// One derived, display-ready metric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub title: String,
    pub primary_value: String,
    pub supporting_detail: String,
    #[serde(rename = "type")]
    pub kind: InsightKind,
    /// Unformatted headline number behind `primary_value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_delta: Option<f64>,
}

impl Insight {
    pub fn new(
        kind: InsightKind,
        title: impl Into<String>,
        primary_value: impl Into<String>,
        supporting_detail: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            primary_value: primary_value.into(),
            supporting_detail: supporting_detail.into(),
            kind,
            raw_value: None,
            context_date: None,
            context_category: None,
            context_delta: None,
        }
    }

    pub fn with_raw_value(mut self, value: f64) -> Self {
        self.raw_value = Some(value);
        self
    }

    pub fn with_context_date(mut self, date: impl Into<String>) -> Self {
        self.context_date = Some(date.into());
        self
    }

    pub fn with_context_category(mut self, category: impl Into<String>) -> Self {
        self.context_category = Some(category.into());
        self
    }

    pub fn with_context_delta(mut self, delta: f64) -> Self {
        self.context_delta = Some(delta);
        self
    }
}

/// Finds the first insight of the given kind.
pub fn find_kind(insights: &[Insight], kind: InsightKind) -> Option<&Insight> {
    insights.iter().find(|insight| insight.kind == kind)
}

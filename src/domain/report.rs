use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::Insight;

/// Caller-supplied report header data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportMeta {
    pub dataset_name: String,
    pub generation_date: NaiveDate,
}

impl ReportMeta {
    pub fn new(dataset_name: impl Into<String>, generation_date: NaiveDate) -> Self {
        Self {
            dataset_name: dataset_name.into(),
            generation_date,
        }
    }
}

/// Everything produced by one pipeline run, ready for display or export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecapData {
    pub dataset_name: String,
    pub insights: Vec<Insight>,
    pub narrative: String,
    pub markdown: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    pub generated_at: DateTime<Utc>,
}

//! Parsing of the raw KPI and spend JSON documents plus the loaders that
//! supply that text.

pub mod loader;
pub mod repository;

use serde::de::DeserializeOwned;

use crate::{
    domain::{CategorySpendRecord, KpiDailyRecord},
    errors::{DatasetError, DatasetKind},
};

pub use loader::{DirectoryDatasets, EmbeddedDatasets, TextProvider};
pub use repository::{DatasetRepository, Variant};

/// Parsed, shape-checked records ready for the insight engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub daily: Vec<KpiDailyRecord>,
    pub spend: Vec<CategorySpendRecord>,
}

/// Parses both documents.
///
/// The KPI array must be non-empty; an empty spend array is fine. Dates are
/// not validated here, the engine drops records it cannot place on a calendar.
pub fn parse_dataset(kpi_json: &str, spend_json: &str) -> Result<Dataset, DatasetError> {
    let daily = parse_kpi(kpi_json)?;
    if daily.is_empty() {
        return Err(DatasetError::Empty);
    }
    let spend = parse_spend(spend_json)?;
    tracing::debug!(
        daily = daily.len(),
        spend = spend.len(),
        "parsed dataset"
    );
    Ok(Dataset { daily, spend })
}

pub fn parse_kpi(json: &str) -> Result<Vec<KpiDailyRecord>, DatasetError> {
    parse_array(json, DatasetKind::Kpi)
}

pub fn parse_spend(json: &str) -> Result<Vec<CategorySpendRecord>, DatasetError> {
    parse_array(json, DatasetKind::Spend)
}

fn parse_array<T: DeserializeOwned>(json: &str, kind: DatasetKind) -> Result<Vec<T>, DatasetError> {
    serde_json::from_str(json).map_err(|err| DatasetError::malformed(kind, err))
}

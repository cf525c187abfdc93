use std::{fmt, str::FromStr};

use super::{parse_dataset, Dataset, TextProvider};
use crate::errors::RecapError;

/// Named demo dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    A,
    B,
}

impl Variant {
    pub fn kpi_file(self) -> String {
        format!("kpi_daily_{}.json", self)
    }

    pub fn spend_file(self) -> String {
        format!("category_spend_{}.json", self)
    }

    pub fn display_name(self) -> String {
        format!("Demo {}", self)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::A => f.write_str("A"),
            Variant::B => f.write_str("B"),
        }
    }
}

impl FromStr for Variant {
    type Err = RecapError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Variant::A),
            "B" => Ok(Variant::B),
            other => Err(RecapError::InvalidArgument(format!(
                "unknown dataset variant `{}` (expected A or B)",
                other
            ))),
        }
    }
}

/// Loads and parses datasets through a [`TextProvider`].
#[derive(Debug, Clone)]
pub struct DatasetRepository<P> {
    provider: P,
}

impl<P: TextProvider> DatasetRepository<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn load_variant(&self, variant: Variant) -> Result<Dataset, RecapError> {
        tracing::info!(%variant, "loading dataset variant");
        self.load_files(&variant.kpi_file(), &variant.spend_file())
    }

    pub fn load_files(&self, kpi_name: &str, spend_name: &str) -> Result<Dataset, RecapError> {
        let kpi_json = self.provider.load_text(kpi_name)?;
        let spend_json = self.provider.load_text(spend_name)?;
        Ok(parse_dataset(&kpi_json, &spend_json)?)
    }
}

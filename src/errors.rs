use std::{fmt, io, path::PathBuf};

use thiserror::Error;

/// Identifies which of the two input datasets an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    Kpi,
    Spend,
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetKind::Kpi => f.write_str("KPI"),
            DatasetKind::Spend => f.write_str("spend"),
        }
    }
}

/// Failures raised while turning raw JSON text into records.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("{dataset} dataset is malformed: {source}")]
    Malformed {
        dataset: DatasetKind,
        #[source]
        source: serde_json::Error,
    },
    #[error("KPI dataset is empty")]
    Empty,
}

impl DatasetError {
    pub fn malformed(dataset: DatasetKind, source: serde_json::Error) -> Self {
        Self::Malformed { dataset, source }
    }
}

/// Failures raised by a text provider.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("dataset `{0}` not found")]
    NotFound(String),
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// Top-level error for recap assembly and the CLI.
#[derive(Debug, Error)]
pub enum RecapError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

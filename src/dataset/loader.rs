use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::errors::LoadError;

/// Supplies raw dataset text by logical file name.
pub trait TextProvider {
    fn load_text(&self, name: &str) -> Result<String, LoadError>;
}

impl<T: TextProvider + ?Sized> TextProvider for &T {
    fn load_text(&self, name: &str) -> Result<String, LoadError> {
        (**self).load_text(name)
    }
}

const EMBEDDED: &[(&str, &str)] = &[
    ("kpi_daily_A.json", include_str!("../../data/kpi_daily_A.json")),
    ("kpi_daily_B.json", include_str!("../../data/kpi_daily_B.json")),
    (
        "category_spend_A.json",
        include_str!("../../data/category_spend_A.json"),
    ),
    (
        "category_spend_B.json",
        include_str!("../../data/category_spend_B.json"),
    ),
];

/// Demo datasets compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedDatasets;

impl TextProvider for EmbeddedDatasets {
    fn load_text(&self, name: &str) -> Result<String, LoadError> {
        let name = name.trim_start_matches('/');
        EMBEDDED
            .iter()
            .find(|(file, _)| *file == name)
            .map(|(_, text)| (*text).to_string())
            .ok_or_else(|| LoadError::NotFound(name.to_string()))
    }
}

/// Reads datasets from files under a directory.
#[derive(Debug, Clone)]
pub struct DirectoryDatasets {
    root: PathBuf,
}

impl DirectoryDatasets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl TextProvider for DirectoryDatasets {
    fn load_text(&self, name: &str) -> Result<String, LoadError> {
        let path = self.root.join(name);
        tracing::debug!(path = %path.display(), "reading dataset file");
        fs::read_to_string(&path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => LoadError::NotFound(path.display().to_string()),
            _ => LoadError::Io { path, source },
        })
    }
}

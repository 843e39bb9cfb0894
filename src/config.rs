use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "catalog.toml";

/// Settings for rendering and printing the catalog, read from `catalog.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub title: String,
    pub docs_dir: PathBuf,
    pub color: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            title: "Design Patterns".to_string(),
            docs_dir: PathBuf::from("docs"),
            color: true,
        }
    }
}

impl CatalogConfig {
    pub fn parse(content: &str, origin: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|err| CatalogError::config(origin, err.to_string()))
    }

    /// Missing file means defaults; a malformed one is an error.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                tracing::debug!("Loaded config from {}", path.display());
                Self::parse(&content, path)
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(CatalogError::io(path, err)),
        }
    }
}

use crate::utils::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// TOML config file, e.g.:
///
/// ```toml
/// [store]
/// endpoint = "https://store.example.com"
/// collection = "Service"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub endpoint: Option<String>,
    pub collection: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| CatalogError::Config {
            message: format!("cannot read {}: {}", path.display(), e),
        })?;
        toml::from_str(&text).map_err(|e| CatalogError::Config {
            message: format!("cannot parse {}: {}", path.display(), e),
        })
    }
}

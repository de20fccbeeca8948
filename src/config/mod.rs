pub mod file;

use crate::domain::ports::GatewayConfig;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_endpoint_url, Validate};
use clap::{Parser, Subcommand};
use file::FileConfig;
use std::path::PathBuf;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";
pub const DEFAULT_COLLECTION: &str = "Service";

#[derive(Debug, Parser)]
#[command(name = "kami-catalog")]
#[command(about = "Browse and manage the Kami Spa service catalog")]
pub struct Cli {
    /// Base URL of the hosted document store
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Collection holding the service documents
    #[arg(long, global = true)]
    pub collection: Option<String>,

    /// Path to a TOML config file supplying endpoint/collection defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the catalog and print the service list
    List,
    /// Add a new service offering to the catalog
    Add {
        /// Creator's name
        #[arg(long)]
        creator: String,
        /// Service price (whole units, e.g. 200000)
        #[arg(long)]
        price: String,
        /// Service name
        #[arg(long)]
        name: String,
    },
}

/// Settings after merging: explicit flag > config file > default.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub endpoint: String,
    pub collection: String,
}

impl CatalogConfig {
    pub fn resolve(
        endpoint: Option<String>,
        collection: Option<String>,
        file: Option<&FileConfig>,
    ) -> Self {
        Self {
            endpoint: endpoint
                .or_else(|| file.and_then(|f| f.store.endpoint.clone()))
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            collection: collection
                .or_else(|| file.and_then(|f| f.store.collection.clone()))
                .unwrap_or_else(|| DEFAULT_COLLECTION.to_string()),
        }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => Some(FileConfig::load(path)?),
            None => None,
        };
        Ok(Self::resolve(
            cli.endpoint.clone(),
            cli.collection.clone(),
            file.as_ref(),
        ))
    }
}

impl GatewayConfig for CatalogConfig {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn collection(&self) -> &str {
        &self.collection
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        validate_endpoint_url("endpoint", &self.endpoint)?;
        if self.collection.trim().is_empty() {
            return Err(CatalogError::InvalidConfigValue {
                field: "collection".to_string(),
                value: self.collection.clone(),
                reason: "collection name cannot be empty".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::file::StoreConfig;

    #[test]
    fn defaults_apply_when_nothing_is_given() {
        let config = CatalogConfig::resolve(None, None, None);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.collection, DEFAULT_COLLECTION);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn explicit_flags_win_over_file_values() {
        let file = FileConfig {
            store: StoreConfig {
                endpoint: Some("https://store.example.com".to_string()),
                collection: Some("Staging".to_string()),
            },
        };
        let config = CatalogConfig::resolve(
            Some("https://other.example.com".to_string()),
            None,
            Some(&file),
        );
        assert_eq!(config.endpoint, "https://other.example.com");
        assert_eq!(config.collection, "Staging");
    }

    #[test]
    fn invalid_endpoint_is_rejected() {
        let config = CatalogConfig::resolve(Some("not-a-url".to_string()), None, None);
        assert!(config.validate().is_err());
    }

    #[test]
    fn empty_collection_is_rejected() {
        let config = CatalogConfig::resolve(None, Some("  ".to_string()), None);
        assert!(config.validate().is_err());
    }
}

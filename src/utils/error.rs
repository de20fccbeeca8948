use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("price must be a positive whole number, got `{input}`")]
    NonPositivePrice { input: String },

    #[error("remote store unavailable: {reason}")]
    RemoteUnavailable { reason: String },

    #[error("invalid configuration value for {field}: `{value}` ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("configuration error: {message}")]
    Config { message: String },
}

impl CatalogError {
    pub fn remote(reason: impl Into<String>) -> Self {
        CatalogError::RemoteUnavailable {
            reason: reason.into(),
        }
    }

    /// Local input errors, surfaced synchronously before any network call.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            CatalogError::EmptyField { .. } | CatalogError::NonPositivePrice { .. }
        )
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::remote(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

use crate::utils::error::{CatalogError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn require_non_empty(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::EmptyField { field });
    }
    Ok(())
}

/// Parses a submitted price field. The form hands the price over as raw text,
/// so a non-numeric value is the same user mistake as a negative one and maps
/// to the same error.
pub fn parse_positive_price(input: &str) -> Result<i64> {
    let price: i64 = input
        .trim()
        .parse()
        .map_err(|_| CatalogError::NonPositivePrice {
            input: input.to_string(),
        })?;
    if price <= 0 {
        return Err(CatalogError::NonPositivePrice {
            input: input.to_string(),
        });
    }
    Ok(price)
}

pub fn validate_endpoint_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CatalogError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CatalogError::InvalidConfigValue {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CatalogError::InvalidConfigValue {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_empty() {
        assert!(require_non_empty("creator", "Alice").is_ok());
        assert!(require_non_empty("creator", "").is_err());
        assert!(require_non_empty("creator", "   ").is_err());
    }

    #[test]
    fn test_parse_positive_price() {
        assert_eq!(parse_positive_price("100").unwrap(), 100);
        assert_eq!(parse_positive_price(" 200000 ").unwrap(), 200000);
        assert!(parse_positive_price("-5").is_err());
        assert!(parse_positive_price("0").is_err());
        assert!(parse_positive_price("abc").is_err());
        assert!(parse_positive_price("12.5").is_err());
    }

    #[test]
    fn test_non_numeric_price_maps_to_price_error() {
        let err = parse_positive_price("abc").unwrap_err();
        assert!(matches!(err, CatalogError::NonPositivePrice { .. }));
    }

    #[test]
    fn test_validate_endpoint_url() {
        assert!(validate_endpoint_url("endpoint", "https://example.com").is_ok());
        assert!(validate_endpoint_url("endpoint", "http://example.com").is_ok());
        assert!(validate_endpoint_url("endpoint", "").is_err());
        assert!(validate_endpoint_url("endpoint", "not-a-url").is_err());
        assert!(validate_endpoint_url("endpoint", "ftp://example.com").is_err());
    }
}

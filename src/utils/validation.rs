use crate::utils::error::{PushMailError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PushMailError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PushMailError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(PushMailError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PushMailError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(PushMailError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_validate_url() {
        assert_ok!(validate_url("rpc_url", "https://example.com/rpc"));
        assert_ok!(validate_url("rpc_url", "http://127.0.0.1:8545"));
        assert_err!(validate_url("rpc_url", ""));
        assert_err!(validate_url("rpc_url", "invalid-url"));
        assert_err!(validate_url("rpc_url", "ws://example.com"));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("email.title", "Hello").is_ok());
        assert!(validate_non_empty_string("email.title", "   ").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("wait_secs", 5u64, 0, 600).is_ok());
        assert!(validate_range("wait_secs", 601u64, 0, 600).is_err());
    }
}

use crate::utils::error::{AuthenticatorError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(AuthenticatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(AuthenticatorError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(AuthenticatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(AuthenticatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| AuthenticatorError::MissingConfigError {
            field: field_name.to_string(),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AuthenticatorError::InvalidConfigValueError {
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
        return Err(AuthenticatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_aws_region(field_name: &str, region: &str) -> Result<()> {
    validate_non_empty_string(field_name, region)?;

    // AWS region format validation
    if !region
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(AuthenticatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: region.to_string(),
            reason: "AWS region can only contain lowercase letters, numbers, and hyphens"
                .to_string(),
        });
    }

    Ok(())
}

/// 驗證 ACME 挑戰的網域名稱 (允許萬用字元前綴)
pub fn validate_domain_name(field_name: &str, domain: &str) -> Result<()> {
    validate_non_empty_string(field_name, domain)?;

    let name = domain.strip_prefix("*.").unwrap_or(domain);
    let name = name.strip_suffix('.').unwrap_or(name);

    if name.len() > 253 {
        return Err(AuthenticatorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: domain.to_string(),
            reason: "Domain name cannot exceed 253 characters".to_string(),
        });
    }

    for label in name.split('.') {
        if label.is_empty() || label.len() > 63 {
            return Err(AuthenticatorError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: domain.to_string(),
                reason: "Each label must be between 1 and 63 characters".to_string(),
            });
        }
        if !label
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(AuthenticatorError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: domain.to_string(),
                reason: format!("Label '{}' contains invalid characters", label),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint_url", "https://route53.amazonaws.com").is_ok());
        assert!(validate_url("endpoint_url", "http://localhost:4566").is_ok());
        assert!(validate_url("endpoint_url", "").is_err());
        assert!(validate_url("endpoint_url", "invalid-url").is_err());
        assert!(validate_url("endpoint_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("ttl", 10, 1).is_ok());
        assert!(validate_positive_number("ttl", 0, 1).is_err());
    }

    #[test]
    fn test_validate_aws_region() {
        assert!(validate_aws_region("region", "us-east-1").is_ok());
        assert!(validate_aws_region("region", "").is_err());
        assert!(validate_aws_region("region", "US_EAST_1").is_err());
    }

    #[test]
    fn test_validate_domain_name() {
        assert!(validate_domain_name("domain", "example.com").is_ok());
        assert!(validate_domain_name("domain", "*.example.com").is_ok());
        assert!(validate_domain_name("domain", "foo.example.com.").is_ok());
        assert!(validate_domain_name("domain", "").is_err());
        assert!(validate_domain_name("domain", "foo..example.com").is_err());
        assert!(validate_domain_name("domain", "exa mple.com").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some(3u64);
        let missing: Option<u64> = None;
        assert_eq!(*validate_required_field("ttl", &present).unwrap(), 3);
        assert!(matches!(
            validate_required_field("ttl", &missing),
            Err(AuthenticatorError::MissingConfigError { .. })
        ));
    }
}

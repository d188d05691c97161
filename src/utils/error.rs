use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthenticatorError {
    #[error("Unable to locate AWS credentials: {message}")]
    MissingCredentials { message: String },

    #[error("Route53 {operation} failed{}: {message}", code_suffix(.code))]
    Api {
        operation: &'static str,
        code: Option<String>,
        message: String,
    },

    #[error("Unable to find a Route53 hosted zone for {domain}")]
    ZoneNotFound { domain: String },

    #[error("Timed out after {waited:?} waiting for Route53 change {change_id}")]
    PropagationTimeout { change_id: String, waited: Duration },

    #[error("{message}")]
    Plugin {
        message: String,
        #[source]
        source: Box<AuthenticatorError>,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

fn code_suffix(code: &Option<String>) -> String {
    code.as_deref()
        .map(|c| format!(" ({})", c))
        .unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, AuthenticatorError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AuthenticatorError {
    /// 原始的 provider 錯誤（`Plugin` 會展開到其來源）
    pub fn root(&self) -> &AuthenticatorError {
        match self {
            AuthenticatorError::Plugin { source, .. } => source.root(),
            other => other,
        }
    }

    /// Credential and API failures are the ones cleanup is allowed to swallow.
    pub fn is_provider_error(&self) -> bool {
        matches!(
            self,
            AuthenticatorError::MissingCredentials { .. } | AuthenticatorError::Api { .. }
        )
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.root() {
            AuthenticatorError::MissingCredentials { .. } => ErrorSeverity::Critical,
            AuthenticatorError::IoError(_) => ErrorSeverity::Critical,
            AuthenticatorError::Api { .. } | AuthenticatorError::PropagationTimeout { .. } => {
                ErrorSeverity::Medium
            }
            _ => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.root() {
            AuthenticatorError::MissingCredentials { .. } => {
                "No AWS credentials were found for Route53".to_string()
            }
            AuthenticatorError::Api {
                operation, code, ..
            } => match code {
                Some(code) => format!("Route53 rejected the {} call ({})", operation, code),
                None => format!("Route53 {} call failed", operation),
            },
            AuthenticatorError::ZoneNotFound { domain } => {
                format!("No public Route53 hosted zone matches {}", domain)
            }
            AuthenticatorError::PropagationTimeout { change_id, .. } => {
                format!("Route53 change {} did not reach INSYNC in time", change_id)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.root() {
            AuthenticatorError::MissingCredentials { .. } => {
                "Configure AWS credentials (environment, shared profile or instance role)"
            }
            AuthenticatorError::Api { .. } => {
                "Check the IAM permissions for route53:ListHostedZones, route53:ChangeResourceRecordSets and route53:GetChange, then retry"
            }
            AuthenticatorError::ZoneNotFound { .. } => {
                "Create a public hosted zone for the domain or one of its parents"
            }
            AuthenticatorError::PropagationTimeout { .. } => {
                "Increase max_wait_secs or retry later"
            }
            AuthenticatorError::IoError(_) => "Check that the configuration file exists and is readable",
            _ => "Fix the configuration value and run again",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_includes_code() {
        let err = AuthenticatorError::Api {
            operation: "ChangeResourceRecordSets",
            code: Some("Throttling".to_string()),
            message: "Rate exceeded".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Route53 ChangeResourceRecordSets failed (Throttling): Rate exceeded"
        );

        let err = AuthenticatorError::Api {
            operation: "GetChange",
            code: None,
            message: "dispatch failure".to_string(),
        };
        assert_eq!(err.to_string(), "Route53 GetChange failed: dispatch failure");
    }

    #[test]
    fn test_plugin_error_reports_root_cause() {
        let err = AuthenticatorError::Plugin {
            message: "wrapped".to_string(),
            source: Box::new(AuthenticatorError::MissingCredentials {
                message: "no providers".to_string(),
            }),
        };
        assert!(matches!(
            err.root(),
            AuthenticatorError::MissingCredentials { .. }
        ));
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(!err.is_provider_error());
        assert!(err.root().is_provider_error());
    }

    #[test]
    fn test_zone_not_found_is_not_provider_error() {
        let err = AuthenticatorError::ZoneNotFound {
            domain: "foo.example.com".to_string(),
        };
        assert!(!err.is_provider_error());
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.user_friendly_message().contains("foo.example.com"));
    }
}

use crate::config::AuthenticatorConfig;
use crate::domain::model::Challenge;
use crate::utils::error::{AuthenticatorError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeAction {
    Perform,
    Cleanup,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LambdaRequest {
    pub action: ChallengeAction,
    pub challenges: Vec<Challenge>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LambdaResponse {
    pub message: String,
    pub action: ChallengeAction,
    pub challenges_processed: usize,
}

fn parse_env<T: FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AuthenticatorError::InvalidConfigValueError {
                field: name.to_string(),
                value: raw.clone(),
                reason: "Value must be a non-negative integer".to_string(),
            }),
        Err(_) => Ok(default),
    }
}

impl AuthenticatorConfig {
    /// 從 Lambda 環境變數建立配置
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            region: env::var("ROUTE53_REGION").ok(),
            profile: env::var("ROUTE53_PROFILE").ok(),
            endpoint_url: env::var("ROUTE53_ENDPOINT_URL").ok(),
            ttl: parse_env("ROUTE53_TTL", defaults.ttl)?,
            poll_interval_secs: parse_env(
                "ROUTE53_POLL_INTERVAL_SECS",
                defaults.poll_interval_secs,
            )?,
            max_wait_secs: parse_env("ROUTE53_MAX_WAIT_SECS", defaults.max_wait_secs)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_env_falls_back_to_default() {
        assert_eq!(
            parse_env("ACME_ROUTE53_TEST_SURELY_UNSET_TTL", 42u32).unwrap(),
            42
        );
    }

    #[test]
    fn test_deserialize_request() {
        let request: LambdaRequest = serde_json::from_str(
            r#"{
                "action": "cleanup",
                "challenges": [
                    {"domain": "example.com", "validation": "abc"},
                    {"domain": "*.example.com", "validation": "def"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(request.action, ChallengeAction::Cleanup);
        assert_eq!(request.challenges.len(), 2);
        assert_eq!(request.challenges[1], Challenge::new("*.example.com", "def"));
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let result: std::result::Result<LambdaRequest, _> =
            serde_json::from_str(r#"{"action": "renew", "challenges": []}"#);
        assert!(result.is_err());
    }
}

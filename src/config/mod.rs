#[cfg(feature = "cli")]
pub mod cli;
pub mod lambda;
pub mod toml_config;

use crate::core::propagation::{DEFAULT_MAX_WAIT, DEFAULT_POLL_INTERVAL};
use crate::core::record_mutator::DEFAULT_TTL;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Settings shared by every entry point (CLI, TOML file, Lambda environment).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthenticatorConfig {
    /// Region for the SDK; Route53 itself is global.
    pub region: Option<String>,
    /// Named profile from the shared AWS config files.
    pub profile: Option<String>,
    /// Overrides the Route53 endpoint, e.g. for LocalStack.
    pub endpoint_url: Option<String>,
    pub ttl: u32,
    pub poll_interval_secs: u64,
    pub max_wait_secs: u64,
}

impl Default for AuthenticatorConfig {
    fn default() -> Self {
        Self {
            region: None,
            profile: None,
            endpoint_url: None,
            ttl: DEFAULT_TTL,
            poll_interval_secs: DEFAULT_POLL_INTERVAL.as_secs(),
            max_wait_secs: DEFAULT_MAX_WAIT.as_secs(),
        }
    }
}

impl ConfigProvider for AuthenticatorConfig {
    fn record_ttl(&self) -> u32 {
        self.ttl
    }

    fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    fn max_wait(&self) -> Duration {
        Duration::from_secs(self.max_wait_secs)
    }
}

impl Validate for AuthenticatorConfig {
    fn validate(&self) -> Result<()> {
        if let Some(region) = &self.region {
            validation::validate_aws_region("region", region)?;
        }
        if let Some(profile) = &self.profile {
            validation::validate_non_empty_string("profile", profile)?;
        }
        if let Some(endpoint) = &self.endpoint_url {
            validation::validate_url("endpoint_url", endpoint)?;
        }

        // Route53 caps TTL at 2^31 - 1 seconds
        validation::validate_range("ttl", u64::from(self.ttl), 1, 2_147_483_647)?;
        validation::validate_positive_number("poll_interval_secs", self.poll_interval_secs, 1)?;
        validation::validate_positive_number(
            "max_wait_secs",
            self.max_wait_secs,
            self.poll_interval_secs,
        )?;

        tracing::debug!("✅ Authenticator configuration validation passed");
        Ok(())
    }
}

use crate::config::AuthenticatorConfig;
use crate::utils::error::{AuthenticatorError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub aws: Option<AwsConfig>,
    pub record: Option<RecordConfig>,
    pub propagation: Option<PropagationConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AwsConfig {
    pub region: Option<String>,
    pub profile: Option<String>,
    pub endpoint_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RecordConfig {
    pub ttl: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PropagationConfig {
    pub poll_interval_secs: Option<u64>,
    pub max_wait_secs: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AuthenticatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AuthenticatorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${AWS_PROFILE})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AuthenticatorError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 將檔案中的設定套用到預設值之上
    pub fn into_authenticator_config(self) -> AuthenticatorConfig {
        let mut config = AuthenticatorConfig::default();

        if let Some(aws) = self.aws {
            config.region = aws.region;
            config.profile = aws.profile;
            config.endpoint_url = aws.endpoint_url;
        }
        if let Some(ttl) = self.record.and_then(|r| r.ttl) {
            config.ttl = ttl;
        }
        if let Some(propagation) = self.propagation {
            if let Some(interval) = propagation.poll_interval_secs {
                config.poll_interval_secs = interval;
            }
            if let Some(max_wait) = propagation.max_wait_secs {
                config.max_wait_secs = max_wait;
            }
        }

        config
    }
}

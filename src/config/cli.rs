use crate::config::toml_config::TomlConfig;
use crate::config::AuthenticatorConfig;
use crate::domain::model::Challenge;
use crate::utils::error::Result;
use crate::utils::validation::{validate_domain_name, validate_required_field};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "acme-route53")]
#[command(about = "ACME DNS-01 authenticator backed by Amazon Route53")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, global = true)]
    pub region: Option<String>,

    #[arg(long, global = true)]
    pub profile: Option<String>,

    #[arg(long, global = true)]
    pub endpoint_url: Option<String>,

    /// TTL of the challenge TXT record in seconds
    #[arg(long, global = true)]
    pub ttl: Option<u32>,

    #[arg(long, global = true)]
    pub poll_interval_secs: Option<u64>,

    #[arg(long, global = true)]
    pub max_wait_secs: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Publish the challenge TXT records and wait until Route53 is INSYNC
    Perform(ChallengeArgs),
    /// Remove the challenge TXT records (best-effort)
    Cleanup(ChallengeArgs),
    /// Print the hosted zone id that would be used for a domain
    FindZone { domain: String },
}

#[derive(Debug, Clone, Args)]
pub struct ChallengeArgs {
    /// Domain being validated (certbot manual hooks export CERTBOT_DOMAIN)
    #[arg(long, env = "CERTBOT_DOMAIN")]
    pub domain: Option<String>,

    /// Validation token for --domain
    #[arg(long, env = "CERTBOT_VALIDATION")]
    pub validation: Option<String>,

    /// Additional challenge as DOMAIN=TOKEN, may be repeated
    #[arg(long = "challenge", value_parser = parse_challenge)]
    pub challenges: Vec<Challenge>,
}

pub fn parse_challenge(raw: &str) -> std::result::Result<Challenge, String> {
    let (domain, validation) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected DOMAIN=TOKEN, got '{}'", raw))?;
    if domain.is_empty() || validation.is_empty() {
        return Err(format!("expected DOMAIN=TOKEN, got '{}'", raw));
    }
    Ok(Challenge::new(domain, validation))
}

impl ChallengeArgs {
    /// `--domain/--validation` first, then every `--challenge`.
    pub fn challenges(&self) -> Result<Vec<Challenge>> {
        let mut challenges = Vec::with_capacity(self.challenges.len() + 1);

        if let Some(domain) = &self.domain {
            let validation = validate_required_field("validation", &self.validation)?;
            challenges.push(Challenge::new(domain.clone(), validation.clone()));
        }
        challenges.extend(self.challenges.iter().cloned());

        if challenges.is_empty() {
            validate_required_field("domain", &self.domain)?;
        }
        for challenge in &challenges {
            validate_domain_name("domain", &challenge.domain)?;
        }

        Ok(challenges)
    }
}

impl CliConfig {
    /// 載入配置檔 (若有)，再套用命令列覆蓋設定
    pub fn resolve_config(&self) -> Result<AuthenticatorConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?.into_authenticator_config(),
            None => AuthenticatorConfig::default(),
        };

        if let Some(region) = &self.region {
            config.region = Some(region.clone());
        }
        if let Some(profile) = &self.profile {
            config.profile = Some(profile.clone());
        }
        if let Some(endpoint) = &self.endpoint_url {
            config.endpoint_url = Some(endpoint.clone());
        }
        if let Some(ttl) = self.ttl {
            config.ttl = ttl;
        }
        if let Some(interval) = self.poll_interval_secs {
            config.poll_interval_secs = interval;
        }
        if let Some(max_wait) = self.max_wait_secs {
            config.max_wait_secs = max_wait;
        }

        Ok(config)
    }
}

use crate::core::{propagation, record_mutator, zone_resolver};
use crate::domain::model::{ChangeAction, Challenge};
use crate::domain::ports::{ConfigProvider, Route53Api};
use crate::utils::error::{AuthenticatorError, Result};

pub const INSTRUCTIONS: &str = "To use the Route53 authenticator, configure AWS credentials through the \
standard credential chain (environment variables, the shared config and credentials files, or an \
instance role) and allow route53:ListHostedZones, route53:ChangeResourceRecordSets and \
route53:GetChange.";

/// DNS-01 authenticator that publishes challenge TXT records in Route53.
pub struct Route53Authenticator<A: Route53Api, C: ConfigProvider> {
    api: A,
    config: C,
}

impl<A: Route53Api, C: ConfigProvider> Route53Authenticator<A, C> {
    pub fn new(api: A, config: C) -> Self {
        Self { api, config }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn config(&self) -> &C {
        &self.config
    }

    pub async fn find_zone_id(&self, domain: &str) -> Result<String> {
        zone_resolver::find_zone_id(&self.api, domain).await
    }

    pub async fn change_txt_record(
        &self,
        action: ChangeAction,
        fqdn: &str,
        value: &str,
    ) -> Result<String> {
        record_mutator::change_txt_record(&self.api, action, fqdn, value, self.config.record_ttl())
            .await
    }

    pub async fn wait_for_change(&self, change_id: &str) -> Result<()> {
        propagation::wait_for_change(
            &self.api,
            change_id,
            self.config.poll_interval(),
            self.config.max_wait(),
        )
        .await
    }

    /// Publishes every challenge record, then waits for each change to propagate.
    ///
    /// Credential and API failures come back as [`AuthenticatorError::Plugin`].
    pub async fn perform(&self, challenges: &[Challenge]) -> Result<()> {
        tracing::info!("🚀 Performing {} DNS-01 challenge(s)", challenges.len());

        let mut change_ids = Vec::with_capacity(challenges.len());
        for challenge in challenges {
            let change_id = self
                .change_txt_record(
                    ChangeAction::Upsert,
                    &challenge.validation_name(),
                    &challenge.validation,
                )
                .await
                .map_err(|e| to_plugin_error("perform", e))?;
            change_ids.push(change_id);
        }

        for change_id in &change_ids {
            self.wait_for_change(change_id)
                .await
                .map_err(|e| to_plugin_error("perform", e))?;
        }

        Ok(())
    }

    /// Removes challenge records. Best-effort: credential and API errors are
    /// logged and skipped. A missing hosted zone is still returned.
    pub async fn cleanup(&self, challenges: &[Challenge]) -> Result<()> {
        tracing::info!("🧹 Cleaning up {} DNS-01 challenge(s)", challenges.len());

        for challenge in challenges {
            let fqdn = challenge.validation_name();
            match self
                .change_txt_record(ChangeAction::Delete, &fqdn, &challenge.validation)
                .await
            {
                Ok(_) => {}
                Err(e) if e.is_provider_error() => {
                    tracing::warn!("Encountered error during cleanup of {}: {}", fqdn, e);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }
}

fn to_plugin_error(phase: &str, err: AuthenticatorError) -> AuthenticatorError {
    if !err.is_provider_error() {
        return err;
    }
    tracing::debug!("Encountered error during {}: {:?}", phase, err);
    AuthenticatorError::Plugin {
        message: format!("{}\n{}", err, INSTRUCTIONS),
        source: Box::new(err),
    }
}

use crate::config::AuthenticatorConfig;
use crate::domain::model::{
    ChangeAction, ChangeRequest, ChangeState, ChangeStatus, HostedZone, HostedZonePage,
};
use crate::domain::ports::Route53Api;
use crate::utils::error::{AuthenticatorError, Result};
use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_credential_types::provider::error::CredentialsError;
use aws_sdk_route53::config::Region;
use aws_sdk_route53::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_route53::types;
use aws_sdk_route53::Client as Route53SdkClient;
use std::error::Error as StdError;

/// Route53 global endpoint is served out of us-east-1.
pub const DEFAULT_REGION: &str = "us-east-1";

/// [`Route53Api`] backed by the AWS SDK and the standard credential chain.
#[derive(Debug, Clone)]
pub struct Route53Client {
    client: Route53SdkClient,
}

impl Route53Client {
    pub fn new(client: Route53SdkClient) -> Self {
        Self { client }
    }

    /// Loads shared AWS configuration, then applies the region, profile and
    /// endpoint overrides from `config`.
    pub async fn from_config(config: &AuthenticatorConfig) -> Self {
        let region = Region::new(
            config
                .region
                .clone()
                .unwrap_or_else(|| DEFAULT_REGION.to_string()),
        );

        let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile);
        }
        let shared_config = loader.load().await;

        let mut builder = aws_sdk_route53::config::Builder::from(&shared_config);
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint);
        }

        Self::new(Route53SdkClient::from_conf(builder.build()))
    }
}

/// Walks the source chain looking for a credentials provider failure.
pub fn is_credentials_error(err: &(dyn StdError + 'static)) -> bool {
    let mut current = Some(err);
    while let Some(e) = current {
        if e.downcast_ref::<CredentialsError>().is_some() {
            return true;
        }
        current = e.source();
    }
    false
}

fn map_sdk_error<E, R>(operation: &'static str, err: SdkError<E, R>) -> AuthenticatorError
where
    E: ProvideErrorMetadata + StdError + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    if is_credentials_error(&err) {
        return AuthenticatorError::MissingCredentials {
            message: DisplayErrorContext(&err).to_string(),
        };
    }

    let code = err.code().map(str::to_string);
    let message = err
        .message()
        .map(str::to_string)
        .unwrap_or_else(|| DisplayErrorContext(&err).to_string());
    AuthenticatorError::Api {
        operation,
        code,
        message,
    }
}

fn build_error(operation: &'static str, err: aws_sdk_route53::error::BuildError) -> AuthenticatorError {
    AuthenticatorError::Api {
        operation,
        code: None,
        message: format!("invalid request: {}", err),
    }
}

fn sdk_action(action: ChangeAction) -> types::ChangeAction {
    match action {
        ChangeAction::Upsert => types::ChangeAction::Upsert,
        ChangeAction::Delete => types::ChangeAction::Delete,
    }
}

#[async_trait]
impl Route53Api for Route53Client {
    async fn list_hosted_zones(&self, marker: Option<String>) -> Result<HostedZonePage> {
        let output = self
            .client
            .list_hosted_zones()
            .set_marker(marker)
            .send()
            .await
            .map_err(|e| map_sdk_error("ListHostedZones", e))?;

        let zones = output
            .hosted_zones()
            .iter()
            .map(|zone| HostedZone {
                id: zone.id().to_string(),
                name: zone.name().to_string(),
                is_private: zone.config().map(|c| c.private_zone()).unwrap_or(false),
            })
            .collect();

        let next_marker = if output.is_truncated() {
            output.next_marker().map(str::to_string)
        } else {
            None
        };

        Ok(HostedZonePage { zones, next_marker })
    }

    async fn change_record_sets(&self, request: &ChangeRequest) -> Result<String> {
        const OPERATION: &str = "ChangeResourceRecordSets";

        let record = types::ResourceRecord::builder()
            .value(&request.record_value)
            .build()
            .map_err(|e| build_error(OPERATION, e))?;

        let record_set = types::ResourceRecordSet::builder()
            .name(&request.record_name)
            .r#type(types::RrType::Txt)
            .ttl(i64::from(request.ttl))
            .resource_records(record)
            .build()
            .map_err(|e| build_error(OPERATION, e))?;

        let change = types::Change::builder()
            .action(sdk_action(request.action))
            .resource_record_set(record_set)
            .build()
            .map_err(|e| build_error(OPERATION, e))?;

        let batch = types::ChangeBatch::builder()
            .comment("ACME DNS-01 challenge")
            .changes(change)
            .build()
            .map_err(|e| build_error(OPERATION, e))?;

        let output = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(&request.zone_id)
            .change_batch(batch)
            .send()
            .await
            .map_err(|e| map_sdk_error(OPERATION, e))?;

        output
            .change_info()
            .map(|info| info.id().to_string())
            .ok_or_else(|| AuthenticatorError::Api {
                operation: OPERATION,
                code: None,
                message: "response did not include ChangeInfo".to_string(),
            })
    }

    async fn get_change(&self, change_id: &str) -> Result<ChangeStatus> {
        let output = self
            .client
            .get_change()
            .id(change_id)
            .send()
            .await
            .map_err(|e| map_sdk_error("GetChange", e))?;

        let info = output.change_info().ok_or_else(|| AuthenticatorError::Api {
            operation: "GetChange",
            code: None,
            message: "response did not include ChangeInfo".to_string(),
        })?;

        Ok(ChangeStatus {
            change_id: info.id().to_string(),
            state: ChangeState::from_status(info.status().as_str()),
        })
    }
}

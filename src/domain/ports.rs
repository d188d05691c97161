use crate::domain::model::{ChangeRequest, ChangeStatus, HostedZonePage};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// The three Route53 calls the authenticator needs.
#[async_trait]
pub trait Route53Api: Send + Sync {
    /// `marker` is `None` for the first page.
    async fn list_hosted_zones(&self, marker: Option<String>) -> Result<HostedZonePage>;

    /// Returns the change id Route53 assigned to the batch.
    async fn change_record_sets(&self, request: &ChangeRequest) -> Result<String>;

    async fn get_change(&self, change_id: &str) -> Result<ChangeStatus>;
}

pub trait ConfigProvider: Send + Sync {
    fn record_ttl(&self) -> u32;
    fn poll_interval(&self) -> Duration;
    fn max_wait(&self) -> Duration;
}

//! In-memory Route53 double shared by the integration tests.

#![allow(dead_code)]

use acme_route53::domain::model::{
    ChangeRequest, ChangeState, ChangeStatus, HostedZone, HostedZonePage,
};
use acme_route53::domain::ports::Route53Api;
use acme_route53::{AuthenticatorConfig, AuthenticatorError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

pub fn zone(id: &str, name: &str, is_private: bool) -> HostedZone {
    HostedZone {
        id: id.to_string(),
        name: name.to_string(),
        is_private,
    }
}

pub fn private_example_com() -> HostedZone {
    zone("BAD-PRIVATE", "example.com.", true)
}

pub fn example_net() -> HostedZone {
    zone("BAD-WRONG-TLD", "example.net.", false)
}

pub fn example_com() -> HostedZone {
    zone("EXAMPLE", "example.com.", false)
}

pub fn foo_example_com() -> HostedZone {
    zone("FOO", "foo.example.com.", false)
}

/// Config with no waiting between polls.
pub fn fast_config() -> AuthenticatorConfig {
    AuthenticatorConfig {
        poll_interval_secs: 0,
        max_wait_secs: 60,
        ..Default::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    MissingCredentials,
    Api,
}

impl Failure {
    fn to_error(self, operation: &'static str) -> AuthenticatorError {
        match self {
            Failure::MissingCredentials => AuthenticatorError::MissingCredentials {
                message: "no providers in chain provided credentials".to_string(),
            },
            Failure::Api => AuthenticatorError::Api {
                operation,
                code: Some("foo".to_string()),
                message: "bar".to_string(),
            },
        }
    }
}

#[derive(Default)]
pub struct FakeRoute53 {
    pages: Vec<Vec<HostedZone>>,
    statuses: Mutex<VecDeque<String>>,
    change_failure: Option<Failure>,
    list_failure: Option<Failure>,
    pub list_calls: Mutex<Vec<Option<String>>>,
    pub submitted: Mutex<Vec<ChangeRequest>>,
    pub get_change_calls: Mutex<Vec<String>>,
}

impl FakeRoute53 {
    pub fn with_pages(pages: Vec<Vec<HostedZone>>) -> Self {
        Self {
            pages,
            ..Default::default()
        }
    }

    pub fn with_zones(zones: Vec<HostedZone>) -> Self {
        Self::with_pages(vec![zones])
    }

    /// Statuses returned by successive `get_change` calls; INSYNC once drained.
    pub fn statuses(self, statuses: &[&str]) -> Self {
        *self.statuses.lock().unwrap() = statuses.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn failing_changes(mut self, failure: Failure) -> Self {
        self.change_failure = Some(failure);
        self
    }

    pub fn failing_listing(mut self, failure: Failure) -> Self {
        self.list_failure = Some(failure);
        self
    }

    pub fn submitted(&self) -> Vec<ChangeRequest> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn list_call_count(&self) -> usize {
        self.list_calls.lock().unwrap().len()
    }

    pub fn get_change_count(&self) -> usize {
        self.get_change_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Route53Api for FakeRoute53 {
    async fn list_hosted_zones(&self, marker: Option<String>) -> Result<HostedZonePage> {
        self.list_calls.lock().unwrap().push(marker.clone());
        if let Some(failure) = self.list_failure {
            return Err(failure.to_error("ListHostedZones"));
        }

        let index: usize = marker.as_deref().map_or(0, |m| m.parse().unwrap());
        let zones = self.pages.get(index).cloned().unwrap_or_default();
        let next_marker = if index + 1 < self.pages.len() {
            Some((index + 1).to_string())
        } else {
            None
        };

        Ok(HostedZonePage { zones, next_marker })
    }

    async fn change_record_sets(&self, request: &ChangeRequest) -> Result<String> {
        if let Some(failure) = self.change_failure {
            return Err(failure.to_error("ChangeResourceRecordSets"));
        }
        let mut submitted = self.submitted.lock().unwrap();
        submitted.push(request.clone());
        Ok(format!("/change/C{}", submitted.len()))
    }

    async fn get_change(&self, change_id: &str) -> Result<ChangeStatus> {
        self.get_change_calls
            .lock()
            .unwrap()
            .push(change_id.to_string());
        let status = self
            .statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| "INSYNC".to_string());

        Ok(ChangeStatus {
            change_id: change_id.to_string(),
            state: ChangeState::from_status(&status),
        })
    }
}

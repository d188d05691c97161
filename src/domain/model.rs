use serde::{Deserialize, Serialize};
use std::fmt;

pub const ACME_CHALLENGE_LABEL: &str = "_acme-challenge";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostedZone {
    pub id: String,
    /// Zone apex as Route53 reports it, usually with a trailing dot.
    pub name: String,
    pub is_private: bool,
}

/// One page of a `ListHostedZones` listing.
#[derive(Debug, Clone, Default)]
pub struct HostedZonePage {
    pub zones: Vec<HostedZone>,
    pub next_marker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub domain: String,
    pub validation: String,
}

impl Challenge {
    pub fn new(domain: impl Into<String>, validation: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            validation: validation.into(),
        }
    }

    /// `_acme-challenge.<domain>`; wildcard identifiers validate on their base name.
    pub fn validation_name(&self) -> String {
        let domain = self.domain.strip_prefix("*.").unwrap_or(&self.domain);
        let domain = domain.strip_suffix('.').unwrap_or(domain);
        format!("{}.{}", ACME_CHALLENGE_LABEL, domain)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeAction {
    Upsert,
    Delete,
}

impl ChangeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeAction::Upsert => "UPSERT",
            ChangeAction::Delete => "DELETE",
        }
    }
}

impl fmt::Display for ChangeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single-record TXT change, submitted once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRequest {
    pub action: ChangeAction,
    pub zone_id: String,
    pub record_name: String,
    /// Already quoted TXT value.
    pub record_value: String,
    pub ttl: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeState {
    Pending,
    InSync,
    Other(String),
}

impl ChangeState {
    pub fn from_status(status: &str) -> Self {
        match status {
            "PENDING" => ChangeState::Pending,
            "INSYNC" => ChangeState::InSync,
            other => ChangeState::Other(other.to_string()),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ChangeState::Pending)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeStatus {
    pub change_id: String,
    pub state: ChangeState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_name() {
        assert_eq!(
            Challenge::new("example.com", "token").validation_name(),
            "_acme-challenge.example.com"
        );
        assert_eq!(
            Challenge::new("*.example.com", "token").validation_name(),
            "_acme-challenge.example.com"
        );
        assert_eq!(
            Challenge::new("foo.example.com.", "token").validation_name(),
            "_acme-challenge.foo.example.com"
        );
    }

    #[test]
    fn test_change_state_from_status() {
        assert_eq!(ChangeState::from_status("PENDING"), ChangeState::Pending);
        assert_eq!(ChangeState::from_status("INSYNC"), ChangeState::InSync);
        assert_eq!(
            ChangeState::from_status("FAILED"),
            ChangeState::Other("FAILED".to_string())
        );
        assert!(ChangeState::Pending.is_pending());
        assert!(!ChangeState::Other("FAILED".to_string()).is_pending());
    }
}

use crate::domain::model::HostedZone;
use crate::domain::ports::Route53Api;
use crate::utils::error::{AuthenticatorError, Result};

fn labels(name: &str) -> Vec<String> {
    name.trim_end_matches('.')
        .split('.')
        .map(|label| label.to_ascii_lowercase())
        .collect()
}

/// True when every label of `zone_name` matches the tail of `domain`.
pub fn zone_matches(zone_name: &str, domain: &str) -> bool {
    let zone = labels(zone_name);
    let target = labels(domain);
    if zone.len() > target.len() || zone.iter().all(|label| label.is_empty()) {
        return false;
    }
    target[target.len() - zone.len()..] == zone[..]
}

fn label_count(zone: &HostedZone) -> usize {
    zone.name.trim_end_matches('.').split('.').count()
}

/// Scans every page of public hosted zones and keeps the most specific
/// suffix match for `domain`.
pub async fn find_zone_id<A>(api: &A, domain: &str) -> Result<String>
where
    A: Route53Api + ?Sized,
{
    let mut best: Option<HostedZone> = None;
    let mut marker = None;
    let mut pages = 0usize;

    loop {
        let page = api.list_hosted_zones(marker).await?;
        pages += 1;

        for zone in page.zones {
            if zone.is_private || !zone_matches(&zone.name, domain) {
                continue;
            }
            let more_specific = best
                .as_ref()
                .map_or(true, |current| label_count(&zone) > label_count(current));
            if more_specific {
                tracing::debug!("Candidate zone {} ({}) for {}", zone.name, zone.id, domain);
                best = Some(zone);
            }
        }

        match page.next_marker {
            Some(next) => marker = Some(next),
            None => break,
        }
    }

    match best {
        Some(zone) => {
            tracing::debug!(
                "Resolved {} to hosted zone {} ({}) after {} page(s)",
                domain,
                zone.name,
                zone.id,
                pages
            );
            Ok(zone.id)
        }
        None => Err(AuthenticatorError::ZoneNotFound {
            domain: domain.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_matches_suffix() {
        assert!(zone_matches("example.com.", "foo.example.com"));
        assert!(zone_matches("example.com", "example.com."));
        assert!(zone_matches("Example.COM.", "_acme-challenge.foo.example.com"));
        assert!(!zone_matches("example.net.", "foo.example.com"));
        assert!(!zone_matches("foo.example.com.", "example.com"));
    }

    #[test]
    fn test_zone_matches_whole_labels_only() {
        assert!(!zone_matches("example.com.", "badexample.com"));
        assert!(!zone_matches("", "example.com"));
    }
}

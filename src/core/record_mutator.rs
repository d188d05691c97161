use crate::core::zone_resolver::find_zone_id;
use crate::domain::model::{ChangeAction, ChangeRequest};
use crate::domain::ports::Route53Api;
use crate::utils::error::Result;

pub const DEFAULT_TTL: u32 = 10;

/// Wraps a value in double quotes, escaping `"` and `\` as TXT strings require.
pub fn quote_txt_value(value: &str) -> String {
    let mut quoted = String::with_capacity(value.len() + 2);
    quoted.push('"');
    for c in value.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Resolves the zone for `fqdn` and submits one TXT change holding `value`.
pub async fn change_txt_record<A>(
    api: &A,
    action: ChangeAction,
    fqdn: &str,
    value: &str,
    ttl: u32,
) -> Result<String>
where
    A: Route53Api + ?Sized,
{
    let zone_id = find_zone_id(api, fqdn).await?;

    let request = ChangeRequest {
        action,
        zone_id,
        record_name: fqdn.to_string(),
        record_value: quote_txt_value(value),
        ttl,
    };

    let change_id = api.change_record_sets(&request).await?;
    tracing::info!(
        "📝 Submitted {} of TXT {} in zone {} (change {})",
        action,
        fqdn,
        request.zone_id,
        change_id
    );
    Ok(change_id)
}

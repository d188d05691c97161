use crate::domain::model::ChangeState;
use crate::domain::ports::Route53Api;
use crate::utils::error::{AuthenticatorError, Result};
use std::time::Duration;
use tokio::time::Instant;

pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(600);

/// Polls `GetChange` until the change leaves PENDING.
///
/// Any non-PENDING status ends the wait. Gives up with
/// [`AuthenticatorError::PropagationTimeout`] once another sleep would push
/// past `max_wait`.
pub async fn wait_for_change<A>(
    api: &A,
    change_id: &str,
    poll_interval: Duration,
    max_wait: Duration,
) -> Result<()>
where
    A: Route53Api + ?Sized,
{
    let started = Instant::now();
    let mut polls = 0u32;

    loop {
        let status = api.get_change(change_id).await?;
        polls += 1;

        match status.state {
            ChangeState::Pending => {}
            ChangeState::InSync => {
                tracing::info!(
                    "✅ Route53 change {} is INSYNC after {} poll(s)",
                    change_id,
                    polls
                );
                return Ok(());
            }
            ChangeState::Other(other) => {
                tracing::warn!(
                    "Route53 change {} reported unexpected status {}, treating as done",
                    change_id,
                    other
                );
                return Ok(());
            }
        }

        let waited = started.elapsed();
        if waited + poll_interval > max_wait {
            return Err(AuthenticatorError::PropagationTimeout {
                change_id: change_id.to_string(),
                waited,
            });
        }

        tracing::debug!("⏳ Route53 change {} still PENDING", change_id);
        tokio::time::sleep(poll_interval).await;
    }
}

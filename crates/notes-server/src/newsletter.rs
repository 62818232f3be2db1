//! Newsletter signup.  There is no real mailing-list backend; the confirm
//! step sleeps for a configured delay to stand in for the upstream call,
//! then records the subscription in memory.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
pub struct Subscription {
    pub email: String,
    pub subscribed_at: DateTime<Local>,
}

#[derive(Debug, Deserialize)]
pub struct SubscribeRequest {
    #[serde(default)]
    pub email: String,
}

/// Minimal shape check: trimmed, no spaces, one '@' with a non-empty local
/// part and a dotted domain.  Deliverability is not our problem here.
pub fn validate_email(raw: &str) -> Result<String, AppError> {
    let email = raw.trim();
    if email.is_empty() || email.contains(char::is_whitespace) {
        return Err(AppError::InvalidEmail);
    }
    let Some((local, domain)) = email.split_once('@') else {
        return Err(AppError::InvalidEmail);
    };
    if local.is_empty() || domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return Err(AppError::InvalidEmail);
    }
    Ok(email.to_string())
}

pub async fn subscribe(state: &AppState, raw_email: &str) -> Result<String, AppError> {
    let email = validate_email(raw_email)?;

    // Simulated upstream confirm call.  No I/O, no retry, no partial
    // failure; the delay is the whole "network".
    tokio::time::sleep(state.confirm_delay).await;

    let subscription = Subscription {
        email: email.clone(),
        subscribed_at: Local::now(),
    };
    let mut subs = state.subscriptions.write().await;
    subs.push(subscription);
    info!("newsletter: subscribed {} ({} total)", email, subs.len());

    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_accepts_plain_addresses() {
        assert_eq!(
            validate_email("hello@podchemy.com").unwrap(),
            "hello@podchemy.com"
        );
        // Surrounding whitespace is trimmed, not rejected.
        assert_eq!(validate_email("  a@b.co  ").unwrap(), "a@b.co");
    }

    #[test]
    fn test_validate_email_rejects_bad_shapes() {
        for bad in ["", "   ", "no-at-sign", "@example.com", "a@", "a@nodot", "a b@c.com", "a@b@c.com"] {
            assert!(validate_email(bad).is_err(), "should reject {:?}", bad);
        }
    }
}

//! Bounded retry-with-backoff policy for the journey detail fetch.

use std::time::Duration;

use crate::ClientError;

/// Retry policy: a fixed number of additional attempts with
/// exponential backoff. Only transient failures are eligible;
/// not-found and other client errors never retry.
#[derive(Debug, Clone)]
pub(crate) struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(100),
        }
    }
}

impl RetryPolicy {
    /// Whether the given failure on attempt number `attempt`
    /// (zero-based) warrants another try.
    pub fn should_retry(&self, err: &ClientError, attempt: u32) -> bool {
        attempt < self.max_retries && is_transient(err)
    }

    /// Delay before the next attempt: base delay doubled per attempt.
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_delay * 2u32.saturating_pow(attempt)
    }
}

/// Transport failures and server-side errors are transient; any 4xx
/// (not-found included) reflects the request itself and will not heal
/// on retry.
fn is_transient(err: &ClientError) -> bool {
    match err {
        ClientError::Transport(_) => true,
        ClientError::Api { status, .. } => status.is_server_error(),
    }
}

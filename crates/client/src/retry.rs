//! Fixed-delay retry for idempotent requests.

use crate::ClientResult;
use std::future::Future;
use std::time::Duration;

/// How often and how patiently a failed request is repeated.
///
/// A request is attempted at most `1 + max_retries` times, sleeping `delay` between
/// attempts. Errors that are not retryable are returned immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }

    /// Runs `operation` until it succeeds or the retries are used up.
    ///
    /// `request` names the request in log output.
    pub async fn run<T, F, Fut>(&self, request: &str, mut operation: F) -> ClientResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = ClientResult<T>>,
    {
        let mut retries_left = self.max_retries;
        loop {
            match operation().await {
                Ok(value) => return Ok(value),
                Err(e) if e.is_retryable() && retries_left > 0 => {
                    tracing::warn!(
                        request,
                        error = %e,
                        retries_left,
                        delay = ?self.delay,
                        "request failed, retrying"
                    );
                    tokio::time::sleep(self.delay).await;
                    retries_left -= 1;
                }
                Err(e) => {
                    tracing::error!(request, error = %e, "request failed, giving up");
                    return Err(e);
                }
            }
        }
    }
}

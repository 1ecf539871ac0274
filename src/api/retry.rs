use crate::error::AppError;
use std::time::Duration;
use tracing::warn;

use super::transport::HttpResponse;

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Total attempts per request, the first one included.
    pub max_attempts: u32,
    /// Linear step: attempt `n` waits `base_delay * n`.
    pub base_delay: Duration,
    /// Prefer the server's `Retry-After` over the linear delay on 429.
    pub respect_retry_after: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            respect_retry_after: true,
        }
    }
}

impl RetryPolicy {
    pub fn delay_for(&self, attempt: u32, retry_after: Option<Duration>) -> Duration {
        match retry_after {
            Some(server_delay) if self.respect_retry_after => server_delay,
            _ => self.base_delay * attempt,
        }
    }
}

fn is_transient(status: u16) -> bool {
    matches!(status, 502 | 503 | 504)
}

/// Runs `send` until it yields a final response or the attempts run out.
///
/// 429 responses, 502/503/504 responses and transport errors are retried.
/// Once attempts are exhausted a 429 becomes [`AppError::RateLimited`], a
/// transient status is handed back as-is and a transport error is returned.
/// Every wait is announced through `notify` before `sleep` is called.
pub fn send_with_retry<N, S, F>(
    policy: &RetryPolicy,
    mut notify: N,
    mut sleep: S,
    mut send: F,
) -> Result<HttpResponse, AppError>
where
    N: FnMut(&str),
    S: FnMut(Duration),
    F: FnMut() -> Result<HttpResponse, AppError>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        let last_attempt = attempt >= max_attempts;

        let wait = match send() {
            Ok(resp) if resp.status == 429 => {
                if last_attempt {
                    warn!(attempt, "rate limited, giving up");
                    return Err(AppError::RateLimited);
                }
                let wait = policy.delay_for(attempt, resp.retry_after);
                notify(&format!(
                    "Rate limited (429), waiting {}ms before retry...",
                    wait.as_millis()
                ));
                wait
            }
            Ok(resp) if is_transient(resp.status) && !last_attempt => {
                let wait = policy.delay_for(attempt, None);
                notify(&format!(
                    "Server error ({}), retrying in {}ms...",
                    resp.status,
                    wait.as_millis()
                ));
                wait
            }
            Ok(resp) => return Ok(resp),
            Err(AppError::HttpError(msg)) if !last_attempt => {
                let wait = policy.delay_for(attempt, None);
                notify(&format!(
                    "Network error ({}), retrying in {}ms...",
                    msg,
                    wait.as_millis()
                ));
                wait
            }
            Err(e) => return Err(e),
        };

        warn!(attempt, wait_ms = wait.as_millis() as u64, "retrying request");
        sleep(wait);
        attempt += 1;
    }
}

//! Retry loop: run a closure until success or policy says stop.

use super::classify;
use super::policy::{RetryDecision, RetryPolicy};
use crate::engine::{EngineError, Operation};

/// Runs `f(attempt)` until it succeeds or the retry policy says to stop.
///
/// `attempt` is 1-based. Each retry logs one warning naming `op`, then sleeps
/// for the backoff duration before calling `f` again. The last error is
/// returned when retries run out.
pub fn run_with_retry<T, F>(policy: &RetryPolicy, op: Operation, mut f: F) -> Result<T, EngineError>
where
    F: FnMut(u32) -> Result<T, EngineError>,
{
    let mut attempt = 1u32;
    loop {
        match f(attempt) {
            Ok(v) => return Ok(v),
            Err(e) => match policy.decide(attempt, classify::classify(&e)) {
                RetryDecision::NoRetry => return Err(e),
                RetryDecision::RetryAfter(d) => {
                    tracing::warn!(
                        operation = %op,
                        attempt,
                        delay_ms = d.as_millis() as u64,
                        error = %e,
                        "transient download error in {}, retrying",
                        op
                    );
                    if !d.is_zero() {
                        std::thread::sleep(d);
                    }
                    attempt += 1;
                }
            },
        }
    }
}

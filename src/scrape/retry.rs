//! Bounded retry of flaky interactions.
//!
//! Synthetic pointer movement onto freshly rendered controls fails often
//! enough that the consent flow needs a retry envelope. The policy is a
//! plain value over any fallible async action so it can be tested with fake
//! actions and counters.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use tokio::time::sleep;

/// Error kinds that may be retried without side effects beyond repeating
/// the same action.
pub trait Recoverable {
    fn is_recoverable(&self) -> bool;
}

impl Recoverable for super::engine::EngineError {
    fn is_recoverable(&self) -> bool {
        super::engine::EngineError::is_recoverable(self)
    }
}

/// Runs a fallible action up to a fixed number of attempts with a fixed
/// pause between them.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        debug_assert!(max_attempts > 0);
        Self {
            max_attempts,
            backoff,
        }
    }

    /// Execute `action`, retrying recoverable failures until the attempt cap
    /// is reached. Non-recoverable errors propagate immediately; the last
    /// recoverable error propagates once attempts are exhausted.
    pub async fn run<T, E, F, Fut>(&self, mut action: F) -> Result<T, E>
    where
        E: Recoverable + Display,
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        let mut remaining = self.max_attempts;
        loop {
            remaining -= 1;
            match action().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_recoverable() && remaining > 0 => {
                    log::debug!("retry ({remaining} to go) after recoverable failure: {err}");
                    sleep(self.backoff).await;
                }
                Err(err) => return Err(err),
            }
        }
    }
}

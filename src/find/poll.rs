//! Polling primitive
//!
//! Runs an attempt function under a wall-clock budget. No delay between
//! attempts: the loop is paced only by how fast the attempt itself
//! returns, and bounded only by the deadline.

use std::future::Future;
use std::time::{Duration, Instant};

/// Outcome of one poll iteration
pub(crate) enum Attempt<T> {
    /// A final outcome, possibly empty; polling stops
    Settled(Option<T>),
    /// Transient failure; try again while budget remains
    Retry,
}

/// Drive `attempt` until it settles or `timeout` elapses
///
/// A zero `timeout` means exactly one attempt, whatever its outcome. The
/// deadline is checked before every attempt, so a budget that is already
/// spent performs no attempts at all. Once an attempt has started it runs
/// to completion; the deadline never interrupts it mid-flight.
pub(crate) async fn poll_until<T, F, Fut>(timeout: Duration, mut attempt: F) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Attempt<T>>,
{
    if timeout.is_zero() {
        return match attempt().await {
            Attempt::Settled(found) => found,
            Attempt::Retry => None,
        };
    }

    let deadline = Instant::now() + timeout;
    while Instant::now() < deadline {
        if let Attempt::Settled(found) = attempt().await {
            return found;
        }
    }
    None
}

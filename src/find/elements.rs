//! Multi-element lookup
//!
//! Resolves a collection of elements by locator with the same
//! swallow-all-errors contract as the single-element lookup. There is no
//! validator stage for collections.

use std::time::Duration;

use tracing::trace;

use crate::core::Locator;
use crate::find::context::SearchContext;
use crate::find::poll::{poll_until, Attempt};

/// Safely resolve every element matching a locator
///
/// Retries raw failures until `timeout` elapses (zero means a single
/// attempt) and returns `None` only when the locator was `None` or every
/// attempt failed. A successful find that matches nothing returns
/// `Some(vec![])`: an empty page is an answer, not a failure, and is not
/// retried.
pub async fn safe_find_elements<C>(
    context: &C,
    locator: Option<&Locator>,
    timeout: Duration,
) -> Option<Vec<C::Element>>
where
    C: SearchContext + Sync + ?Sized,
{
    let Some(locator) = locator else {
        return None;
    };

    poll_until(timeout, || attempt_find_all(context, locator)).await
}

/// Deprecated name for [`safe_find_elements`]
#[deprecated(note = "use `safe_find_elements` instead")]
pub async fn safe_get_elements<C>(
    context: &C,
    locator: Option<&Locator>,
    timeout: Duration,
) -> Option<Vec<C::Element>>
where
    C: SearchContext + Sync + ?Sized,
{
    safe_find_elements(context, locator, timeout).await
}

async fn attempt_find_all<C>(context: &C, locator: &Locator) -> Attempt<Vec<C::Element>>
where
    C: SearchContext + Sync + ?Sized,
{
    match context.find_all(locator).await {
        Ok(elements) => Attempt::Settled(Some(elements)),
        Err(err) => {
            trace!("find_all({locator}) failed: {err}");
            Attempt::Retry
        }
    }
}

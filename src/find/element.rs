//! Single-element lookup
//!
//! Resolves one element by locator, optionally post-processing it through
//! an [`ElementCheck`], retrying raw failures until the budget runs out.
//! Never fails: every failure path ends in `None`.

use std::time::Duration;

use tracing::trace;

use crate::core::Locator;
use crate::find::context::{ElementCheck, SearchContext};
use crate::find::poll::{poll_until, Attempt};

/// Safely resolve a single element
///
/// Repeatedly calls the context's raw find until it succeeds or `timeout`
/// elapses; a zero `timeout` means a single attempt. Every error the
/// context reports counts as "not found yet" and is retried, so callers
/// get the element or `None`, never an error.
///
/// A `None` locator short-circuits to `None` without touching the context.
///
/// If `check` is supplied it runs once per successful raw find and may
/// reject (or substitute) the element; rejection ends the lookup with
/// `None` rather than retrying, since the element was genuinely found and
/// judged unacceptable.
pub async fn safe_find_element<C>(
    context: &C,
    locator: Option<&Locator>,
    timeout: Duration,
    check: Option<&ElementCheck<C::Element>>,
) -> Option<C::Element>
where
    C: SearchContext + Sync + ?Sized,
{
    let Some(locator) = locator else {
        return None;
    };

    poll_until(timeout, || attempt_find(context, locator, check)).await
}

/// Deprecated name for [`safe_find_element`]
#[deprecated(note = "use `safe_find_element` instead")]
pub async fn safe_get_element<C>(
    context: &C,
    locator: Option<&Locator>,
    timeout: Duration,
    check: Option<&ElementCheck<C::Element>>,
) -> Option<C::Element>
where
    C: SearchContext + Sync + ?Sized,
{
    safe_find_element(context, locator, timeout, check).await
}

/// One poll iteration: raw find, then the optional check
async fn attempt_find<C>(
    context: &C,
    locator: &Locator,
    check: Option<&ElementCheck<C::Element>>,
) -> Attempt<C::Element>
where
    C: SearchContext + Sync + ?Sized,
{
    match context.find_one(locator).await {
        Ok(element) => match check {
            Some(check) => Attempt::Settled(check(element)),
            None => Attempt::Settled(Some(element)),
        },
        Err(err) => {
            trace!("find_one({locator}) failed: {err}");
            Attempt::Retry
        }
    }
}

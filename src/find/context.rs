//! Search context contract
//!
//! The collaborator capability this crate wraps: one raw find-one and one
//! raw find-all operation. Drivers, frames, and element sub-contexts all
//! implement this; the safe lookup layer never sees anything else of them.

use async_trait::async_trait;

use crate::core::{Locator, Result};

/// A scope that can perform raw element lookups
///
/// Implementations report failures (no match, stale frame, stale window,
/// anything else the driver raises) as [`LookupError`](crate::LookupError)
/// values; the safe lookup layer treats every failure as transient and
/// retries it within the caller's budget.
#[async_trait]
pub trait SearchContext {
    /// Handle to a located element; ownership passes to the caller
    type Element: Send;

    /// Resolve a single element matching the locator
    async fn find_one(&self, locator: &Locator) -> Result<Self::Element>;

    /// Resolve every element matching the locator
    ///
    /// An empty collection is a valid answer, not a failure.
    async fn find_all(&self, locator: &Locator) -> Result<Vec<Self::Element>>;
}

/// Post-found validator for single-element lookups
///
/// Runs once per successful raw find. Returning `None` rejects the element
/// and ends the lookup with an absent result; rejection is final and is
/// not retried. The validator may also substitute a different element
/// (a child, a normalized handle) for the one the driver returned.
pub type ElementCheck<E> = dyn Fn(E) -> Option<E> + Send + Sync;

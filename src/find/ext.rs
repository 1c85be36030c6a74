//! Method syntax for safe lookups
//!
//! Importing [`SafeSearch`] puts the safe lookups on every search context
//! as methods, so call sites read `driver.safe_find_element(...)` instead
//! of routing through the free functions.

use std::time::Duration;

use async_trait::async_trait;

use crate::core::Locator;
use crate::find::context::{ElementCheck, SearchContext};
use crate::find::{element, elements};

/// Safe lookup methods, available on every [`SearchContext`]
#[async_trait]
pub trait SafeSearch: SearchContext {
    /// Method form of [`safe_find_element`](element::safe_find_element)
    async fn safe_find_element(
        &self,
        locator: Option<&Locator>,
        timeout: Duration,
        check: Option<&ElementCheck<Self::Element>>,
    ) -> Option<Self::Element>;

    /// Method form of [`safe_find_elements`](elements::safe_find_elements)
    async fn safe_find_elements(
        &self,
        locator: Option<&Locator>,
        timeout: Duration,
    ) -> Option<Vec<Self::Element>>;
}

#[async_trait]
impl<C> SafeSearch for C
where
    C: SearchContext + Sync + ?Sized,
{
    async fn safe_find_element(
        &self,
        locator: Option<&Locator>,
        timeout: Duration,
        check: Option<&ElementCheck<Self::Element>>,
    ) -> Option<Self::Element> {
        element::safe_find_element(self, locator, timeout, check).await
    }

    async fn safe_find_elements(
        &self,
        locator: Option<&Locator>,
        timeout: Duration,
    ) -> Option<Vec<Self::Element>> {
        elements::safe_find_elements(self, locator, timeout).await
    }
}

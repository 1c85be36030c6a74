//! Configured finder
//!
//! Binds a search context to a [`LookupConfig`] so call sites that want a
//! shared default poll budget don't repeat it on every lookup. Calls that
//! need their own budget use the `_within` variants.

use std::time::Duration;

use crate::core::{Locator, LookupConfig};
use crate::find::context::{ElementCheck, SearchContext};
use crate::find::{element, elements};

/// A search context paired with default lookup budgets
pub struct Finder<'a, C: ?Sized> {
    context: &'a C,
    config: LookupConfig,
}

impl<'a, C> Finder<'a, C>
where
    C: SearchContext + Sync + ?Sized,
{
    /// Wrap a context with the default config (single-attempt lookups)
    pub fn new(context: &'a C) -> Self {
        Self::with_config(context, LookupConfig::default())
    }

    /// Wrap a context with an explicit config
    pub fn with_config(context: &'a C, config: LookupConfig) -> Self {
        Self { context, config }
    }

    /// The active configuration
    pub fn config(&self) -> &LookupConfig {
        &self.config
    }

    /// Safe single-element lookup using the configured budget
    pub async fn find_element(
        &self,
        locator: Option<&Locator>,
        check: Option<&ElementCheck<C::Element>>,
    ) -> Option<C::Element> {
        element::safe_find_element(self.context, locator, self.config.timeout(), check).await
    }

    /// Safe single-element lookup with an explicit budget
    pub async fn find_element_within(
        &self,
        locator: Option<&Locator>,
        timeout: Duration,
        check: Option<&ElementCheck<C::Element>>,
    ) -> Option<C::Element> {
        element::safe_find_element(self.context, locator, timeout, check).await
    }

    /// Safe multi-element lookup using the configured budget
    pub async fn find_elements(&self, locator: Option<&Locator>) -> Option<Vec<C::Element>> {
        elements::safe_find_elements(self.context, locator, self.config.timeout()).await
    }

    /// Safe multi-element lookup with an explicit budget
    pub async fn find_elements_within(
        &self,
        locator: Option<&Locator>,
        timeout: Duration,
    ) -> Option<Vec<C::Element>> {
        elements::safe_find_elements(self.context, locator, timeout).await
    }
}

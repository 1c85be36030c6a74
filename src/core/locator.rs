//! Locator descriptors
//!
//! A locator names *how* a search context should select elements: a
//! strategy plus a value. This crate never interprets locators; they pass
//! through to the driver unchanged.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Selection strategy understood by the search context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Match by element id attribute
    Id,
    /// Match by CSS selector
    Css,
    /// Match by XPath expression
    XPath,
    /// Match by name attribute
    Name,
    /// Match by anchor link text
    LinkText,
    /// Match by tag name
    Tag,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Strategy::Id => "id",
            Strategy::Css => "css",
            Strategy::XPath => "xpath",
            Strategy::Name => "name",
            Strategy::LinkText => "link-text",
            Strategy::Tag => "tag",
        };
        f.write_str(name)
    }
}

/// How to find element(s): a strategy and the value it selects on
///
/// Owned by the caller and handed to the lookup functions by reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locator {
    strategy: Strategy,
    value: String,
}

impl Locator {
    /// Create a locator with an explicit strategy
    pub fn new(strategy: Strategy, value: impl Into<String>) -> Self {
        Self {
            strategy,
            value: value.into(),
        }
    }

    /// Locate by element id
    pub fn id(value: impl Into<String>) -> Self {
        Self::new(Strategy::Id, value)
    }

    /// Locate by CSS selector
    pub fn css(value: impl Into<String>) -> Self {
        Self::new(Strategy::Css, value)
    }

    /// Locate by XPath expression
    pub fn xpath(value: impl Into<String>) -> Self {
        Self::new(Strategy::XPath, value)
    }

    /// Locate by name attribute
    pub fn name(value: impl Into<String>) -> Self {
        Self::new(Strategy::Name, value)
    }

    /// Locate by anchor link text
    pub fn link_text(value: impl Into<String>) -> Self {
        Self::new(Strategy::LinkText, value)
    }

    /// Locate by tag name
    pub fn tag(value: impl Into<String>) -> Self {
        Self::new(Strategy::Tag, value)
    }

    /// The selection strategy
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The value the strategy selects on
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={:?}", self.strategy, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let locator = Locator::id("banana");
        assert_eq!(locator.strategy(), Strategy::Id);
        assert_eq!(locator.value(), "banana");
        assert_eq!(Locator::css(".toolbar").strategy(), Strategy::Css);
        assert_eq!(Locator::xpath("//div").strategy(), Strategy::XPath);
    }

    #[test]
    fn test_display() {
        assert_eq!(Locator::id("banana").to_string(), "id=\"banana\"");
        assert_eq!(
            Locator::link_text("Sign in").to_string(),
            "link-text=\"Sign in\""
        );
    }

    #[test]
    fn test_equality() {
        assert_eq!(Locator::css("#app"), Locator::css("#app"));
        assert_ne!(Locator::css("#app"), Locator::id("#app"));
    }
}

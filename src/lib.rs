//! Safefind - resilient element lookup for browser automation
//!
//! UI tests constantly query for elements that haven't rendered yet, are
//! mid-transition, or momentarily vanish. Raw driver lookups fail hard in
//! exactly those moments. Safefind wraps a driver's find operations in a
//! deadline-bounded retry loop that swallows every lookup failure into a
//! plain `Option`: callers get the element(s) or `None`, never an error.
//!
//! # Architecture
//!
//! - **Core**: locator descriptors, the lookup error taxonomy, and config
//! - **Find**: the search context contract, the polling primitive, and the
//!   safe single/multi element lookups built on it
//!
//! # Usage
//!
//! ```rust,no_run
//! use std::time::Duration;
//!
//! use safefind::{Locator, SafeSearch};
//!
//! # struct Driver;
//! # #[async_trait::async_trait]
//! # impl safefind::SearchContext for Driver {
//! #     type Element = String;
//! #     async fn find_one(&self, locator: &Locator) -> safefind::Result<String> {
//! #         Ok(locator.value().to_string())
//! #     }
//! #     async fn find_all(&self, locator: &Locator) -> safefind::Result<Vec<String>> {
//! #         Ok(vec![locator.value().to_string()])
//! #     }
//! # }
//! #[tokio::main]
//! async fn main() {
//!     let driver = Driver; // any SearchContext implementation
//!
//!     // Poll for up to five seconds, then give up quietly.
//!     let banner = driver
//!         .safe_find_element(Some(&Locator::id("banner")), Duration::from_secs(5), None)
//!         .await;
//!
//!     match banner {
//!         Some(element) => println!("found {element}"),
//!         None => println!("no banner on this page"),
//!     }
//! }
//! ```

pub mod core;
pub mod find;

// Re-export commonly used items
pub use crate::core::{Locator, LookupConfig, LookupError, Result, Strategy};
pub use crate::find::{
    safe_find_element, safe_find_elements, ElementCheck, Finder, SafeSearch, SearchContext,
};

//! Find module - safe element lookups
//!
//! Contains the search context contract, the polling primitive, and the
//! safe single/multi element lookups built on it.

pub mod context;
pub mod element;
pub mod elements;
pub mod ext;
pub mod finder;
mod poll;

pub use context::{ElementCheck, SearchContext};
pub use element::safe_find_element;
pub use elements::safe_find_elements;
pub use ext::SafeSearch;
pub use finder::Finder;

//! Core module - shared infrastructure for safefind
//!
//! Contains the locator descriptor, the lookup error taxonomy, and the
//! configuration types used by the find layer.

pub mod config;
pub mod error;
pub mod locator;

pub use config::LookupConfig;
pub use error::{LookupError, Result};
pub use locator::{Locator, Strategy};

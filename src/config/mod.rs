//! Configuration module.
//!
//! Loads, heals, and validates the site's `config.json`, and decides
//! whether startup may proceed.

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{Bootstrap, ConfigLoader, LoaderOptions};
pub use schema::*;
pub use validation::{ValidationResult, Validator};

//! Observability module.
//!
//! Logging setup for the bootstrap binary.

pub mod logging;

pub use logging::{LogFormat, init_logging};

//! `siteboot` - Configuration bootstrap for a self-hosted portfolio site.
//!
//! The library exposes [`config::ConfigLoader`], which turns the state of
//! `config.json` into a [`config::Bootstrap`] outcome; the binary maps
//! outcomes to operator notices and exit codes.

pub mod cli;
pub mod config;
pub mod error;
pub mod observability;

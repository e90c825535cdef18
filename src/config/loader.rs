//! Configuration loader.
//!
//! Implements the bootstrap pipeline for `config.json`:
//! 1. Missing file: write defaults (with the current year) and stop.
//! 2. Raw read, UTF-8 BOM stripped.
//! 3. JSON parse to a raw value; must be an object.
//! 4. Missing-key scan against the declared field list.
//! 5. Typed deserialization with per-field defaults.
//! 6. Heal rewrite if any key was missing, then stop.
//! 7. Credential gate, then hand the config to the caller.
//!
//! The loader never terminates the process. Each terminal outcome is a
//! [`Bootstrap`] variant or a [`ConfigError`]; the binary decides what each
//! one means for the exit code.

use crate::config::schema::{CONFIG_FILE, DECLARED_FIELDS, SiteConfig};
use crate::config::validation::Validator;
use crate::error::ConfigError;

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

// ============================================================================
// Public API
// ============================================================================

/// Options for the configuration loader.
#[derive(Debug, Clone)]
pub struct LoaderOptions {
    /// Path of the config file. Defaults to `config.json` in the working
    /// directory.
    pub path: PathBuf,
}

impl LoaderOptions {
    /// Creates options pointing at an explicit config path.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from(CONFIG_FILE),
        }
    }
}

/// Terminal outcome of a bootstrap run.
///
/// Only `Ready` hands a usable configuration to the caller. The other two
/// variants mean the file was just written and the operator must look at it
/// before the next start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bootstrap {
    /// The file was complete and passed the credential gate.
    Ready(SiteConfig),

    /// No file existed; a default one was written. The process should exit
    /// successfully so the operator edits it.
    CreatedDefault {
        /// Path of the file that was created.
        path: PathBuf,
    },

    /// The file was valid but missing keys; it was rewritten with defaults
    /// filled in. The process should exit successfully so the operator
    /// reviews it.
    Healed {
        /// Path of the file that was rewritten.
        path: PathBuf,
        /// Keys that were absent and got their default value.
        added: Vec<String>,
    },
}

/// Site configuration loader.
///
/// Runs once at process startup, before anything else touches the file;
/// concurrent invocations may race on the write and are out of scope.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: LoaderOptions,
}

impl ConfigLoader {
    /// Creates a loader with the given options.
    #[must_use]
    pub const fn new(options: LoaderOptions) -> Self {
        Self { options }
    }

    /// Creates a loader using the conventional `config.json` path.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(LoaderOptions::default())
    }

    /// Path the loader reads from and writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.options.path
    }

    /// Loads the configuration, creating or healing the file as needed.
    ///
    /// Unknown keys in the file are ignored. They survive when nothing is
    /// missing (the file is not rewritten) and are dropped by a heal
    /// rewrite, which regenerates the file from the typed config.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ParseError`] if the file is not valid JSON, is not
    ///   a JSON object, or a field has the wrong type.
    /// - [`ConfigError::InsecureCredential`] if `admin_user` or
    ///   `admin_pass` still holds its shipped placeholder.
    /// - [`ConfigError::ReadError`] / [`ConfigError::WriteError`] on I/O
    ///   failures.
    pub fn load(&self) -> Result<Bootstrap, ConfigError> {
        let path = &self.options.path;

        if !path.exists() {
            return self.create_default();
        }

        let raw_content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
                path: path.clone(),
                source,
            })?;

        // Handle UTF-8 BOM
        let raw_content = raw_content.strip_prefix('\u{feff}').unwrap_or(&raw_content);

        let raw: serde_json::Value =
            serde_json::from_str(raw_content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                line: Some(e.line()),
                message: e.to_string(),
            })?;

        let Some(raw_object) = raw.as_object() else {
            return Err(ConfigError::ParseError {
                path: path.clone(),
                line: None,
                message: "top-level value is not a JSON object".to_string(),
            });
        };

        // Declared fields absent from the raw object get their default
        // during deserialization; remember which ones those were.
        let missing: Vec<String> = DECLARED_FIELDS
            .iter()
            .filter(|field| !raw_object.contains_key(**field))
            .map(|field| (*field).to_string())
            .collect();

        let config: SiteConfig =
            serde_json::from_value(raw).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                line: None,
                message: format!("failed to deserialize configuration: {e}"),
            })?;

        if !missing.is_empty() {
            return self.heal(&config, missing);
        }

        debug!(path = %path.display(), "configuration file is complete");

        let result = Validator::new().validate(&config);
        for issue in &result.warnings {
            warn!(field = %issue.field, "{}", issue.message);
        }
        if let Some(issue) = result.errors.first() {
            return Err(ConfigError::InsecureCredential {
                field: if issue.field == "admin_user" {
                    "admin_user"
                } else {
                    "admin_pass"
                },
                path: path.clone(),
            });
        }

        info!(site = %config.site_name, "configuration loaded");
        Ok(Bootstrap::Ready(config))
    }

    // ========================================================================
    // Write paths
    // ========================================================================

    /// Writes a fully-defaulted config with the current year.
    fn create_default(&self) -> Result<Bootstrap, ConfigError> {
        let path = &self.options.path;
        let config = SiteConfig::with_current_year();

        self.write_pretty(&config)?;
        info!(path = %path.display(), "created default configuration");

        Ok(Bootstrap::CreatedDefault { path: path.clone() })
    }

    /// Rewrites the file with every declared key present.
    fn heal(&self, config: &SiteConfig, added: Vec<String>) -> Result<Bootstrap, ConfigError> {
        let path = &self.options.path;

        self.write_pretty(config)?;
        info!(
            path = %path.display(),
            added = added.len(),
            "healed configuration with missing keys"
        );

        Ok(Bootstrap::Healed {
            path: path.clone(),
            added,
        })
    }

    fn write_pretty(&self, config: &SiteConfig) -> Result<(), ConfigError> {
        let path = &self.options.path;
        let json = config
            .to_pretty_json()
            .map_err(|e| ConfigError::WriteError {
                path: path.clone(),
                source: std::io::Error::other(e),
            })?;

        std::fs::write(path, json).map_err(|source| ConfigError::WriteError {
            path: path.clone(),
            source,
        })
    }
}

//! Error types and exit codes for siteboot.
//!
//! Every failure mode of the configuration bootstrap maps to one
//! [`ConfigError`] variant and one process exit code.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for the siteboot binary.
///
/// Two of the bootstrap outcomes (`CreatedDefault`, `Healed`) exit with
/// `SUCCESS` so the operator edits or reviews the file before a restart;
/// all error outcomes exit non-zero.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution, including the create-default and heal paths.
    pub const SUCCESS: i32 = 0;

    /// General error.
    pub const ERROR: i32 = 1;

    /// Configuration error (malformed JSON, wrong-typed field).
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (unreadable or unwritable config file).
    pub const IO_ERROR: i32 = 3;

    /// Placeholder admin credentials still in place.
    pub const SECURITY_ERROR: i32 = 4;

    /// Usage error (invalid arguments).
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// JSON parsing or typed deserialization failed.
    #[error("could not parse {}{}: {message}", path.display(), line.map_or_else(String::new, |l| format!(" (line {l})")))]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Line number where the error occurred (if available).
        line: Option<usize>,
        /// Error message from the parser.
        message: String,
    },

    /// A credential field still holds its shipped placeholder value.
    #[error("'{field}' in {} still holds the shipped placeholder value", path.display())]
    InsecureCredential {
        /// Name of the credential field (`admin_user` or `admin_pass`).
        field: &'static str,
        /// Path to the configuration file.
        path: PathBuf,
    },

    /// The configuration file exists but could not be read.
    #[error("could not read {}: {source}", path.display())]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration file could not be written.
    #[error("could not write {}: {source}", path.display())]
    WriteError {
        /// Path to the configuration file.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}

impl ConfigError {
    /// Returns the exit code the binary uses for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ParseError { .. } => ExitCode::CONFIG_ERROR,
            Self::InsecureCredential { .. } => ExitCode::SECURITY_ERROR,
            Self::ReadError { .. } | Self::WriteError { .. } => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Validation Types
// ============================================================================

/// A single issue found while validating a loaded configuration.
#[derive(Debug, Clone)]
pub struct ValidationIssue {
    /// Name of the offending field (e.g. `admin_user`).
    pub field: String,
    /// Description of the issue.
    pub message: String,
    /// Severity level of the issue.
    pub severity: Severity,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {} ({})", prefix, self.message, self.field)
    }
}

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Blocks startup.
    Error,
    /// Advisory only, logged and ignored.
    Warning,
}

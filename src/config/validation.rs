//! Configuration validation.
//!
//! Validation runs on the fully deserialized `SiteConfig`, after any key
//! healing. It collects all issues rather than stopping at the first so
//! the operator sees everything at once. Only the sentinel-credential
//! checks are errors; everything else is advisory.

use crate::config::schema::{SENTINEL_ADMIN_PASS, SENTINEL_ADMIN_USER, SiteConfig};
use crate::error::{Severity, ValidationIssue};

/// Copyright years outside this range are almost certainly typos.
const PLAUSIBLE_YEARS: std::ops::RangeInclusive<i32> = 1990..=3000;

// ============================================================================
// Public API
// ============================================================================

/// Result of configuration validation.
#[derive(Debug, Default)]
pub struct ValidationResult {
    /// Issues that block startup.
    pub errors: Vec<ValidationIssue>,

    /// Advisory issues, logged and ignored.
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Returns `true` if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns `true` if validation passed (no errors).
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Site configuration validator.
///
/// The security gate: a config whose `admin_user` or `admin_pass` still
/// equals its shipped placeholder fails validation, in that order.
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<ValidationIssue>,
    warnings: Vec<ValidationIssue>,
}

impl Validator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates a configuration and returns all issues found.
    pub fn validate(&mut self, config: &SiteConfig) -> ValidationResult {
        self.errors.clear();
        self.warnings.clear();

        self.check_credentials(config);
        self.check_site_meta(config);
        self.check_links(config);

        ValidationResult {
            errors: std::mem::take(&mut self.errors),
            warnings: std::mem::take(&mut self.warnings),
        }
    }

    // ========================================================================
    // Checks
    // ========================================================================

    /// The credential gate. admin_user is checked before admin_pass so the
    /// operator fixes the username first, matching the reported error.
    fn check_credentials(&mut self, config: &SiteConfig) {
        if config.admin_user == SENTINEL_ADMIN_USER {
            self.add_error(
                "admin_user",
                format!("still set to the default username '{SENTINEL_ADMIN_USER}'"),
            );
        } else if config.admin_user.is_empty() {
            self.add_warning("admin_user", "admin username is empty".to_string());
        }

        if config.admin_pass == SENTINEL_ADMIN_PASS {
            self.add_error(
                "admin_pass",
                format!("still set to the default password '{SENTINEL_ADMIN_PASS}'"),
            );
        } else if config.admin_pass.is_empty() {
            self.add_warning("admin_pass", "admin password is empty".to_string());
        }
    }

    fn check_site_meta(&mut self, config: &SiteConfig) {
        if config.site_name.is_empty() {
            self.add_warning("site_name", "site name is empty".to_string());
        }

        if !PLAUSIBLE_YEARS.contains(&config.copyright_year) {
            self.add_warning(
                "copyright_year",
                format!("{} is not a plausible year", config.copyright_year),
            );
        }
    }

    fn check_links(&mut self, config: &SiteConfig) {
        if !config.github_url.starts_with("http://") && !config.github_url.starts_with("https://") {
            self.add_warning(
                "github_url",
                format!("'{}' does not look like an http(s) URL", config.github_url),
            );
        }
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn add_error(&mut self, field: &str, message: String) {
        self.errors.push(ValidationIssue {
            field: field.to_string(),
            message,
            severity: Severity::Error,
        });
    }

    fn add_warning(&mut self, field: &str, message: String) {
        self.warnings.push(ValidationIssue {
            field: field.to_string(),
            message,
            severity: Severity::Warning,
        });
    }
}

//! Site configuration schema.
//!
//! `SiteConfig` is a flat record persisted as pretty-printed JSON at a
//! well-known path. Every field carries a serde default so that a file
//! missing keys still deserializes; the loader compares the raw key set
//! against [`DECLARED_FIELDS`] to decide whether the file needs healing.

use serde::{Deserialize, Serialize};

/// Conventional config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "config.json";

/// Placeholder admin username shipped in the default config.
///
/// Startup is refused while `admin_user` still equals this value.
pub const SENTINEL_ADMIN_USER: &str = "changeadmin";

/// Placeholder admin password shipped in the default config.
pub const SENTINEL_ADMIN_PASS: &str = "changepass";

/// Declared configuration keys, in serialization order.
///
/// The loader walks this list once against the raw JSON object to find
/// missing keys. Must stay in sync with the fields of [`SiteConfig`].
pub const DECLARED_FIELDS: &[&str] = &[
    "site_name",
    "site_description",
    "author_name",
    "copyright_year",
    "github_url",
    "linkedin_url",
    "legal_name",
    "legal_address",
    "legal_email",
    "legal_phone",
    "admin_user",
    "admin_pass",
];

// ============================================================================
// SiteConfig
// ============================================================================

/// Site configuration record.
///
/// Unknown keys in the file are ignored on read. They survive as long as
/// the file is not rewritten; a heal rewrite regenerates the file from
/// this struct and drops them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SiteConfig {
    /// Site title shown in page headers.
    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// Short description used in meta tags.
    #[serde(default = "default_site_description")]
    pub site_description: String,

    /// Author name shown in the footer.
    #[serde(default = "default_author_name")]
    pub author_name: String,

    /// Copyright year. Set to the current year when the file is first
    /// created; never recomputed afterwards.
    #[serde(default = "default_copyright_year")]
    pub copyright_year: i32,

    /// Link to the author's GitHub profile.
    #[serde(default = "default_github_url")]
    pub github_url: String,

    /// Link to the author's LinkedIn profile. May be empty or null.
    #[serde(default = "default_linkedin_url")]
    pub linkedin_url: Option<String>,

    /// Legal name for the Impressum page.
    #[serde(default = "default_legal_name")]
    pub legal_name: String,

    /// Postal address for the Impressum page.
    #[serde(default = "default_legal_address")]
    pub legal_address: String,

    /// Contact email for the Impressum page.
    #[serde(default = "default_legal_email")]
    pub legal_email: String,

    /// Contact phone for the Impressum page.
    #[serde(default = "default_legal_phone")]
    pub legal_phone: String,

    /// Admin panel username. Ships as [`SENTINEL_ADMIN_USER`].
    #[serde(default = "default_admin_user")]
    pub admin_user: String,

    /// Admin panel password. Ships as [`SENTINEL_ADMIN_PASS`].
    #[serde(default = "default_admin_pass")]
    pub admin_pass: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            site_description: default_site_description(),
            author_name: default_author_name(),
            copyright_year: default_copyright_year(),
            github_url: default_github_url(),
            linkedin_url: default_linkedin_url(),
            legal_name: default_legal_name(),
            legal_address: default_legal_address(),
            legal_email: default_legal_email(),
            legal_phone: default_legal_phone(),
            admin_user: default_admin_user(),
            admin_pass: default_admin_pass(),
        }
    }
}

impl SiteConfig {
    /// Returns the default configuration with `copyright_year` set to the
    /// current calendar year. Used only on the create path.
    #[must_use]
    pub fn with_current_year() -> Self {
        use chrono::Datelike;

        Self {
            copyright_year: chrono::Local::now().year(),
            ..Self::default()
        }
    }

    /// Serializes the configuration as JSON indented with 4 spaces, the
    /// on-disk format of `config.json`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

fn default_site_name() -> String {
    "Portfolio".to_string()
}

fn default_site_description() -> String {
    "A personal portfolio site.".to_string()
}

fn default_author_name() -> String {
    "System Administrator".to_string()
}

const fn default_copyright_year() -> i32 {
    2024
}

fn default_github_url() -> String {
    "https://github.com/yourusername".to_string()
}

fn default_linkedin_url() -> Option<String> {
    Some(String::new())
}

fn default_legal_name() -> String {
    "Max Mustermann".to_string()
}

fn default_legal_address() -> String {
    "Musterstraße 1, 12345 Musterstadt, Germany".to_string()
}

fn default_legal_email() -> String {
    "contact [at] domain [dot] com".to_string()
}

fn default_legal_phone() -> String {
    "+49 123 456789".to_string()
}

fn default_admin_user() -> String {
    SENTINEL_ADMIN_USER.to_string()
}

fn default_admin_pass() -> String {
    SENTINEL_ADMIN_PASS.to_string()
}

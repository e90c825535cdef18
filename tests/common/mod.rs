//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// Handle for spawning the compiled `siteboot` binary in a scratch
/// working directory.
pub struct SitebootProcess;

impl SitebootProcess {
    /// Runs the binary with the given arguments, using `dir` as the
    /// working directory so the conventional `config.json` lands there.
    #[must_use]
    pub fn spawn_in(dir: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_siteboot"))
            .args(args)
            .current_dir(dir)
            .env_remove("SITEBOOT_CONFIG")
            .env_remove("SITEBOOT_LOG_LEVEL")
            .output()
            .expect("failed to spawn siteboot binary")
    }
}

/// A complete config with non-placeholder credentials, as 4-space JSON.
#[must_use]
pub fn secure_config_json() -> String {
    serde_json::to_string_pretty(&serde_json::json!({
        "site_name": "Hexagon",
        "site_description": "Projects and writing.",
        "author_name": "Jo Doe",
        "copyright_year": 2025,
        "github_url": "https://github.com/jodoe",
        "linkedin_url": "",
        "legal_name": "Jo Doe",
        "legal_address": "1 Example Way, Exampleton",
        "legal_email": "jo@example.org",
        "legal_phone": "+1 555 0100",
        "admin_user": "jo",
        "admin_pass": "s3cret-enough"
    }))
    .expect("fixture config serializes")
}

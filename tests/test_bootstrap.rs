//! Library-level tests for the bootstrap outcomes.

mod common;

use std::path::Path;

use siteboot::config::{
    Bootstrap, ConfigLoader, DECLARED_FIELDS, LoaderOptions, SENTINEL_ADMIN_PASS,
    SENTINEL_ADMIN_USER, SiteConfig,
};
use siteboot::error::ConfigError;

fn loader_in(dir: &Path) -> ConfigLoader {
    ConfigLoader::new(LoaderOptions::new(dir.join("config.json")))
}

// ============================================================================
// Create-on-missing
// ============================================================================

/// With no file present, load() writes a complete default config with the
/// current year and reports `CreatedDefault` instead of a config.
#[test]
fn missing_file_creates_default() {
    use chrono::Datelike;

    let dir = tempfile::tempdir().unwrap();
    let loader = loader_in(dir.path());

    let outcome = loader.load().expect("create path should not error");
    assert_eq!(
        outcome,
        Bootstrap::CreatedDefault {
            path: dir.path().join("config.json")
        }
    );

    let written = std::fs::read_to_string(loader.path()).unwrap();
    let raw: serde_json::Value = serde_json::from_str(&written).unwrap();
    let obj = raw.as_object().unwrap();
    for field in DECLARED_FIELDS {
        assert!(obj.contains_key(*field), "created file missing {field}");
    }
    assert_eq!(
        obj["copyright_year"].as_i64().unwrap(),
        i64::from(chrono::Local::now().year())
    );
    // Created file ships the placeholder credentials on purpose
    assert_eq!(obj["admin_user"], SENTINEL_ADMIN_USER);
    assert_eq!(obj["admin_pass"], SENTINEL_ADMIN_PASS);
}

/// The created file uses 4-space indentation.
#[test]
fn created_file_is_four_space_indented() {
    let dir = tempfile::tempdir().unwrap();
    let loader = loader_in(dir.path());
    loader.load().unwrap();

    let written = std::fs::read_to_string(loader.path()).unwrap();
    assert!(
        written.starts_with("{\n    \""),
        "expected 4-space indent: {written:.40}"
    );
}

// ============================================================================
// Idempotent re-load
// ============================================================================

/// A complete, secure file loads to `Ready` and is not rewritten.
#[test]
fn complete_secure_file_loads_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let loader = loader_in(dir.path());
    let body = common::secure_config_json();
    std::fs::write(loader.path(), &body).unwrap();

    let outcome = loader.load().expect("secure file should load");
    let Bootstrap::Ready(config) = outcome else {
        panic!("expected Ready, got {outcome:?}");
    };
    assert_eq!(config.site_name, "Hexagon");
    assert_eq!(config.admin_user, "jo");
    assert_eq!(config.copyright_year, 2025);

    let after = std::fs::read_to_string(loader.path()).unwrap();
    assert_eq!(after, body, "success path must not rewrite the file");
}

/// Unknown keys are ignored and survive when nothing needs healing.
#[test]
fn unknown_keys_preserved_when_complete() {
    let dir = tempfile::tempdir().unwrap();
    let loader = loader_in(dir.path());

    let mut raw: serde_json::Value =
        serde_json::from_str(&common::secure_config_json()).unwrap();
    raw.as_object_mut()
        .unwrap()
        .insert("theme".to_string(), serde_json::json!("dark"));
    let body = serde_json::to_string_pretty(&raw).unwrap();
    std::fs::write(loader.path(), &body).unwrap();

    let outcome = loader.load().unwrap();
    assert!(matches!(outcome, Bootstrap::Ready(_)));

    let after = std::fs::read_to_string(loader.path()).unwrap();
    assert!(after.contains("theme"), "unknown key should survive");
}

// ============================================================================
// Key healing
// ============================================================================

/// Missing declared keys are backfilled with defaults and the file is
/// rewritten complete; surviving values are preserved.
#[test]
fn missing_keys_are_healed() {
    let dir = tempfile::tempdir().unwrap();
    let loader = loader_in(dir.path());

    let mut raw: serde_json::Value =
        serde_json::from_str(&common::secure_config_json()).unwrap();
    let obj = raw.as_object_mut().unwrap();
    obj.remove("github_url");
    obj.remove("legal_phone");
    std::fs::write(loader.path(), serde_json::to_string(&raw).unwrap()).unwrap();

    let outcome = loader.load().unwrap();
    let Bootstrap::Healed { path, added } = outcome else {
        panic!("expected Healed, got {outcome:?}");
    };
    assert_eq!(path, dir.path().join("config.json"));
    assert_eq!(added, vec!["github_url".to_string(), "legal_phone".to_string()]);

    let healed: SiteConfig =
        serde_json::from_str(&std::fs::read_to_string(loader.path()).unwrap()).unwrap();
    assert_eq!(healed.github_url, SiteConfig::default().github_url);
    assert_eq!(healed.site_name, "Hexagon", "existing values must survive");
    assert_eq!(healed.copyright_year, 2025, "year is never recomputed on heal");
}

/// Healing happens before the credential gate: an incomplete file with
/// sentinel credentials still heals (and exits 0 at the binary level).
#[test]
fn healing_takes_precedence_over_security_gate() {
    let dir = tempfile::tempdir().unwrap();
    let loader = loader_in(dir.path());
    std::fs::write(loader.path(), r#"{"site_name": "Hexagon"}"#).unwrap();

    let outcome = loader.load().unwrap();
    let Bootstrap::Healed { added, .. } = outcome else {
        panic!("expected Healed, got {outcome:?}");
    };
    assert_eq!(added.len(), DECLARED_FIELDS.len() - 1);
}

/// A second load after healing reaches the security gate.
#[test]
fn reload_after_heal_hits_security_gate() {
    let dir = tempfile::tempdir().unwrap();
    let loader = loader_in(dir.path());
    std::fs::write(loader.path(), r#"{"site_name": "Hexagon"}"#).unwrap();

    loader.load().unwrap();
    let second = loader.load();
    assert!(matches!(
        second,
        Err(ConfigError::InsecureCredential {
            field: "admin_user",
            ..
        })
    ));
}

// ============================================================================
// Malformed file
// ============================================================================

/// Invalid JSON is a parse error and the file is left alone.
#[test]
fn malformed_json_is_fatal_and_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let loader = loader_in(dir.path());
    std::fs::write(loader.path(), "{ this is not json").unwrap();

    match loader.load() {
        Err(ConfigError::ParseError { path, .. }) => {
            assert_eq!(path, dir.path().join("config.json"));
        }
        other => panic!("expected ParseError, got {other:?}"),
    }

    let after = std::fs::read_to_string(loader.path()).unwrap();
    assert_eq!(after, "{ this is not json", "parse failure must not write");
}

// ============================================================================
// Security gate
// ============================================================================

/// Sentinel admin_user is rejected regardless of admin_pass.
#[test]
fn sentinel_admin_user_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let loader = loader_in(dir.path());

    let mut raw: serde_json::Value =
        serde_json::from_str(&common::secure_config_json()).unwrap();
    raw["admin_user"] = serde_json::json!(SENTINEL_ADMIN_USER);
    std::fs::write(loader.path(), serde_json::to_string(&raw).unwrap()).unwrap();

    match loader.load() {
        Err(ConfigError::InsecureCredential { field, .. }) => {
            assert_eq!(field, "admin_user");
        }
        other => panic!("expected InsecureCredential, got {other:?}"),
    }
}

/// With admin_user changed, sentinel admin_pass is rejected.
#[test]
fn sentinel_admin_pass_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let loader = loader_in(dir.path());

    let mut raw: serde_json::Value =
        serde_json::from_str(&common::secure_config_json()).unwrap();
    raw["admin_pass"] = serde_json::json!(SENTINEL_ADMIN_PASS);
    std::fs::write(loader.path(), serde_json::to_string(&raw).unwrap()).unwrap();

    match loader.load() {
        Err(ConfigError::InsecureCredential { field, .. }) => {
            assert_eq!(field, "admin_pass");
        }
        other => panic!("expected InsecureCredential, got {other:?}"),
    }
}

// tests/unit_config.rs
use std::fs;
use itemreport_core::config::{Config, Defaults, CONFIG_FILE};

#[test]
fn test_defaults() {
    let d = Defaults::default();
    assert_eq!(d.format, "CSV");
    assert_eq!(d.user, "anonymous");
    assert_eq!(d.role, "USER");
}

#[test]
fn test_load_toml() {
    let d = tempfile::tempdir().unwrap();
    fs::write(
        d.path().join(CONFIG_FILE),
        "[defaults]\nformat = \"HTML\"\nrole = \"ADMIN\"",
    )
    .unwrap();
    let c = Config::load_from(d.path());
    assert_eq!(c.defaults.format, "HTML");
    assert_eq!(c.defaults.role, "ADMIN");
    assert_eq!(c.defaults.user, "anonymous");
}

#[test]
fn test_missing_file_gives_defaults() {
    let d = tempfile::tempdir().unwrap();
    assert_eq!(Config::load_from(d.path()), Config::new());
}

#[test]
fn test_broken_file_is_ignored() {
    let d = tempfile::tempdir().unwrap();
    fs::write(d.path().join(CONFIG_FILE), "[defaults\nformat = ").unwrap();
    assert_eq!(Config::load_from(d.path()), Config::new());
}

#[test]
fn test_parse_toml_rejects_wrong_types() {
    let mut c = Config::new();
    assert!(c.parse_toml("[defaults]\nformat = 3").is_err());
    assert_eq!(c, Config::new());
}

#[test]
fn test_save_then_load() {
    let d = tempfile::tempdir().unwrap();
    let mut c = Config::new();
    c.defaults.user = "Ann".to_string();
    c.save(d.path()).unwrap();
    assert_eq!(Config::load_from(d.path()).defaults.user, "Ann");
}

use scriba_kernel::config::load_scriba_config;
use serial_test::serial;
use std::path::PathBuf;

fn write_config(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("scriba.toml");
    std::fs::write(&path, body).expect("write config");
    path
}

#[test]
#[serial]
fn loads_file_and_keeps_defaults_for_missing_sections() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
[logging]
level = "debug"
json = true
"#,
    );

    let cfg = load_scriba_config(Some(&path)).expect("load config");
    assert_eq!(cfg.logging.level, "debug");
    assert!(cfg.logging.json);
    assert_eq!(cfg.references.fallback, "other");
    assert!(cfg.references.sources.contains_key("thot"));
}

#[test]
#[serial]
fn reads_custom_reference_sources() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = write_config(
        &dir,
        r#"
[references]
fallback = "misc"

[references.sources.thot]
label = "THOT"
url = "https://thot.example/{id}"
"#,
    );

    let cfg = load_scriba_config(Some(&path)).expect("load config");
    assert_eq!(cfg.references.fallback, "misc");
    let (key, source) = cfg.references.canonical("THOT").expect("configured source");
    assert_eq!(key, "thot");
    assert_eq!(source.href("71").as_deref(), Some("https://thot.example/71"));
}

#[test]
#[serial]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = load_scriba_config(Some(dir.path().join("absent.toml"))).unwrap_err();
    assert!(err.is_config());
    assert!(err.to_string().starts_with("Config error"));
}

use std::fs;
/// Integration tests for configuration loading and saving
use nwalign_core::config::{default_config, load_config, save_config, Config};
use nwalign_core::NwError;
use tempfile::TempDir;

#[test]
fn test_config_loading_from_multiple_files() {
    let dir = TempDir::new().unwrap();

    let home_config = dir.path().join("config.toml");
    let project_config = dir.path().join("project.toml");

    fs::write(&home_config, "[scoring]\nmatch = 4\n").unwrap();
    fs::write(
        &project_config,
        r#"
[scoring]
mismatch = -3
gap = -6

[output]
format = "json"
"#,
    )
    .unwrap();

    let config1 = load_config(&home_config).unwrap();
    assert_eq!(config1.scoring.match_score, 4);
    assert_eq!(config1.scoring.gap, -2); // Default

    let config2 = load_config(&project_config).unwrap();
    assert_eq!(config2.scoring.match_score, 2); // Default
    assert_eq!(config2.scoring.mismatch, -3);
    assert_eq!(config2.scoring.gap, -6);
    assert_eq!(config2.output.format, "json");
}

#[test]
fn test_empty_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.toml");
    fs::write(&path, "").unwrap();

    assert_eq!(load_config(&path).unwrap(), default_config());
}

#[test]
fn test_saved_config_is_readable_toml() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("saved.toml");

    let mut config = Config::default();
    config.scoring.gap = -5;
    save_config(&path, &config).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[scoring]"));
    assert!(contents.contains("match = 2"));
    assert!(contents.contains("gap = -5"));
}

#[test]
fn test_save_into_missing_directory_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("config.toml");

    match save_config(&path, &Config::default()) {
        Err(NwError::Io(_)) => {}
        other => panic!("Expected Io error, got {:?}", other),
    }
}

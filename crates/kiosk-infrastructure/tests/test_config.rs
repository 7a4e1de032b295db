use tempfile::TempDir;

use kiosk_infrastructure::ConfigService;

#[test]
fn test_missing_file_yields_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config = ConfigService::load_from(&temp_dir.path().join("absent.toml"))
        .expect("Missing config should fall back to defaults");

    assert_eq!(config.catalog.to_str(), Some("clean.csv"));
    assert_eq!(config.search.limit, 20);
    assert_eq!(config.recommendations.params().seed, 42);
}

#[test]
fn test_full_file_overrides_everything() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("kiosk.toml");
    std::fs::write(
        &path,
        r#"
        catalog = "inventory.csv"

        [search]
        limit = 5

        [recommendations]
        seed = 1
        count = 3
        min_selections = 4
        "#,
    )
    .expect("Should write config fixture");

    let config = ConfigService::load_from(&path).expect("Should load config");
    assert_eq!(config.catalog.to_str(), Some("inventory.csv"));
    assert_eq!(config.search.limit, 5);
    let params = config.recommendations.params();
    assert_eq!(params.seed, 1);
    assert_eq!(params.count, 3);
    assert_eq!(params.min_selections, 4);
}

#[test]
fn test_invalid_file_is_a_config_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("kiosk.toml");
    std::fs::write(&path, "catalog = [not toml").expect("Should write config fixture");

    let err = ConfigService::load_from(&path).expect_err("Invalid TOML should fail");
    assert!(err.is_config(), "unexpected error: {err}");
}

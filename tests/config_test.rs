//! Integration tests for configuration loading

use std::io::Write;
use stylist_poc::infra::Config;
use tempfile::NamedTempFile;

#[test]
fn test_load_config_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();

    let config_content = r#"
[search]
store_delay_ms = 250
outfits_per_store = 3

[[catalog.stores]]
id = "test1"
name = "Test Boutique"
url = "https://boutique.test"

[[catalog.stores]]
id = "test2"
name = "Test Outlet"
url = "https://outlet.test"

[[catalog.events]]
id = 1
name = "Gallery Opening"
description = "Smart casual for an art gallery opening"
"#;

    temp_file.write_all(config_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = Config::from_file(temp_file.path()).unwrap();

    assert_eq!(config.store_delay_ms(), 250);
    assert_eq!(config.outfits_per_store(), 3);
    assert_eq!(config.stores().len(), 2);
    assert_eq!(config.stores()[0].name, "Test Boutique");
    assert_eq!(config.events().len(), 1);
    assert_eq!(config.events()[0].name, "Gallery Opening");
}

#[test]
fn test_empty_file_uses_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"").unwrap();
    temp_file.flush().unwrap();

    let config = Config::from_file(temp_file.path()).unwrap();

    assert_eq!(config.store_delay_ms(), 2000);
    assert_eq!(config.outfits_per_store(), 2);
    assert_eq!(config.stores().len(), 4);
    assert_eq!(config.events().len(), 5);
}

#[test]
fn test_partial_search_section() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[search]\nstore_delay_ms = 10\n").unwrap();
    temp_file.flush().unwrap();

    let config = Config::from_file(temp_file.path()).unwrap();

    assert_eq!(config.store_delay_ms(), 10);
    assert_eq!(config.outfits_per_store(), 2);
}

#[test]
fn test_load_from_path_fallback() {
    let config = Config::load_from_path("/nonexistent/path/config.toml");

    assert_eq!(config.store_delay_ms(), 2000);
    assert_eq!(config.config_file(), "default");
}

#[test]
fn test_config_file_env_var_fallback() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[search]\nstore_delay_ms = 5\n").unwrap();
    temp_file.flush().unwrap();
    let env_path = temp_file.path().to_str().unwrap().to_string();

    // No --config argument: CONFIG_FILE decides the path
    std::env::set_var("CONFIG_FILE", &env_path);
    let config = Config::load(&[]);
    assert_eq!(config.store_delay_ms(), 5);
    assert_eq!(config.config_file(), env_path);

    // An explicit --config argument still wins over the environment
    let args = vec!["prog".to_string(), "--config".to_string(), "cli.toml".to_string()];
    assert_eq!(Config::resolve_config_path(&args), "cli.toml");

    // Without either, the default path applies
    std::env::remove_var("CONFIG_FILE");
    assert_eq!(Config::resolve_config_path(&[]), "config/dev.toml");
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[search\nstore_delay_ms = oops").unwrap();
    temp_file.flush().unwrap();

    assert!(Config::from_file(temp_file.path()).is_err());
}

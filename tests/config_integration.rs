//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use scenery::config::AppConfig;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("SCENERY_OUTPUT__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.output.title, "Test From Env");
    std::env::remove_var("SCENERY_OUTPUT__TITLE");
}

#[test]
#[serial]
fn test_default_file_loading() {
    std::env::remove_var("SCENERY_OUTPUT__TITLE");

    let config = AppConfig::load().unwrap();
    assert_eq!(config.output.title, "City Block");
    assert_eq!(config.output.html, "city_block.html");
}

#[test]
#[serial]
fn test_missing_config_dir_falls_back_to_env_and_defaults() {
    std::env::remove_var("SCENERY_OUTPUT__TITLE");

    let config = AppConfig::load_from("/nonexistent/config/dir").unwrap();
    assert_eq!(config.output.html, "city_block.html");
}

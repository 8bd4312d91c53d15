// Environment variables are process-wide, so everything that sets them lives
// in this one test.

use internhasha::core::ConfigManager;

const VARS: [&str; 4] = [
    "INTERNHASHA_API_URL",
    "INTERNHASHA_HOME",
    "INTERNHASHA_TIMEOUT_SECS",
    "ENVIRONMENT",
];

#[test]
fn test_env_overrides_yaml_overrides_defaults() {
    for var in VARS {
        std::env::remove_var(var);
    }
    std::env::set_var("INTERNHASHA_ENV", "local");

    let dir = tempfile::tempdir().unwrap();
    let yaml_data = dir.path().join("from-yaml");
    let config_path = dir.path().join("config.yaml");
    std::fs::write(
        &config_path,
        format!(
            "local:\n  api_base_url: http://yaml.example\n  timeout_seconds: 7\n  data_path: {}\n  email_domain: \"@example.com\"\nproduction:\n  api_base_url: http://prod.example\n",
            yaml_data.display()
        ),
    )
    .unwrap();

    let config = ConfigManager::load(&config_path).unwrap();
    assert_eq!(config.api.base_url, "http://yaml.example");
    assert_eq!(config.api.timeout_seconds, 7);
    assert_eq!(config.storage.data_dir, yaml_data);
    assert_eq!(config.email_for("kim"), "kim@example.com");

    let env_data = dir.path().join("from-env");
    std::env::set_var("INTERNHASHA_API_URL", "http://env.example");
    std::env::set_var("INTERNHASHA_HOME", &env_data);
    std::env::set_var("INTERNHASHA_TIMEOUT_SECS", "3");

    let config = ConfigManager::load(&config_path).unwrap();
    assert_eq!(config.api.base_url, "http://env.example");
    assert_eq!(config.api.timeout_seconds, 3);
    assert_eq!(config.storage.data_dir, env_data);
    assert_eq!(config.email_for("kim"), "kim@example.com");

    std::env::set_var("INTERNHASHA_TIMEOUT_SECS", "soon");
    assert!(ConfigManager::load(&config_path).is_err());

    std::env::remove_var("INTERNHASHA_TIMEOUT_SECS");
    std::env::set_var("INTERNHASHA_ENV", "production");
    let config = ConfigManager::load(&config_path).unwrap();
    assert_eq!(config.api.base_url, "http://env.example");

    std::env::remove_var("INTERNHASHA_API_URL");
    let config = ConfigManager::load(&config_path).unwrap();
    assert_eq!(config.api.base_url, "http://prod.example");
    assert_eq!(config.api.timeout_seconds, 30);

    std::env::remove_var("INTERNHASHA_HOME");
    std::env::remove_var("INTERNHASHA_ENV");
    let config = ConfigManager::load(&dir.path().join("missing.yaml")).unwrap();
    assert_eq!(config.api.base_url, "https://api-internhasha.wafflestudio.com");
}

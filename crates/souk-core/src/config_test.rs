use std::collections::HashMap;
use std::env::VarError;
use std::path::PathBuf;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_variants() {
    assert_eq!(parse_environment("development"), Environment::Development);
    assert_eq!(parse_environment("test"), Environment::Test);
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_defaults_with_empty_env() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.history_path, PathBuf::from("./data/search_history.json"));
    assert_eq!(cfg.history_capacity, 50);
    assert_eq!(cfg.recent_limit, 10);
    assert_eq!(cfg.debounce_ms, 300);
    assert_eq!(cfg.search_latency_ms, 1000);
    assert_eq!(cfg.search_max_retries, 2);
    assert_eq!(cfg.search_backoff_ms, 250);
    assert_eq!(cfg.listings_path, PathBuf::from("./config/listings.json"));
    assert!(cfg.fallback_policy_path.is_none());
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("SOUK_ENV", "production");
    map.insert("SOUK_HISTORY_PATH", "/var/lib/souk/history.json");
    map.insert("SOUK_DEBOUNCE_MS", "150");
    map.insert("SOUK_SEARCH_LATENCY_MS", "0");
    map.insert("SOUK_FALLBACK_POLICY_PATH", "./config/fallback_policy.yaml");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.history_path, PathBuf::from("/var/lib/souk/history.json"));
    assert_eq!(cfg.debounce_ms, 150);
    assert_eq!(cfg.search_latency_ms, 0);
    assert_eq!(
        cfg.fallback_policy_path,
        Some(PathBuf::from("./config/fallback_policy.yaml"))
    );
}

#[test]
fn build_app_config_blank_policy_path_is_none() {
    let mut map = HashMap::new();
    map.insert("SOUK_FALLBACK_POLICY_PATH", "  ");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert!(cfg.fallback_policy_path.is_none());
}

#[test]
fn build_app_config_rejects_invalid_debounce() {
    let mut map = HashMap::new();
    map.insert("SOUK_DEBOUNCE_MS", "soon");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SOUK_DEBOUNCE_MS"),
        "expected InvalidEnvVar(SOUK_DEBOUNCE_MS), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_invalid_max_retries() {
    let mut map = HashMap::new();
    map.insert("SOUK_SEARCH_MAX_RETRIES", "-1");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SOUK_SEARCH_MAX_RETRIES"),
        "expected InvalidEnvVar(SOUK_SEARCH_MAX_RETRIES), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_zero_capacity() {
    let mut map = HashMap::new();
    map.insert("SOUK_HISTORY_CAPACITY", "0");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SOUK_HISTORY_CAPACITY"),
        "expected InvalidEnvVar(SOUK_HISTORY_CAPACITY), got: {result:?}"
    );
}

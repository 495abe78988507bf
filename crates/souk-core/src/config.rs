use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an unparsable value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an unparsable value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; tests drive this with a `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        or_default(var, default)
            .parse::<u32>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let env = parse_environment(&or_default("SOUK_ENV", "development"));
    let log_level = or_default("SOUK_LOG_LEVEL", "info");

    let history_path = PathBuf::from(or_default(
        "SOUK_HISTORY_PATH",
        "./data/search_history.json",
    ));
    let history_capacity = parse_usize("SOUK_HISTORY_CAPACITY", "50")?;
    if history_capacity == 0 {
        return Err(invalid(
            "SOUK_HISTORY_CAPACITY",
            "capacity must be at least 1".to_string(),
        ));
    }
    let recent_limit = parse_usize("SOUK_RECENT_LIMIT", "10")?;

    let debounce_ms = parse_u64("SOUK_DEBOUNCE_MS", "300")?;
    let search_latency_ms = parse_u64("SOUK_SEARCH_LATENCY_MS", "1000")?;
    let search_max_retries = parse_u32("SOUK_SEARCH_MAX_RETRIES", "2")?;
    let search_backoff_ms = parse_u64("SOUK_SEARCH_BACKOFF_MS", "250")?;

    let listings_path = PathBuf::from(or_default("SOUK_LISTINGS_PATH", "./config/listings.json"));
    let fallback_policy_path = lookup("SOUK_FALLBACK_POLICY_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);

    Ok(AppConfig {
        env,
        log_level,
        history_path,
        history_capacity,
        recent_limit,
        debounce_ms,
        search_latency_ms,
        search_max_retries,
        search_backoff_ms,
        listings_path,
        fallback_policy_path,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Default Overpass mirror list, tried in order. Overridable via
/// `CAFEHOP_OVERPASS_MIRRORS` (comma-separated).
pub const DEFAULT_OVERPASS_MIRRORS: &[&str] = &[
    "https://overpass-api.de/api/interpreter",
    "https://overpass.kumi.systems/api/interpreter",
    "https://overpass.openstreetmap.ru/api/interpreter",
];

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the
/// process, without touching `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default =
        |var: &str, default: &str| -> String { lookup(var).unwrap_or_else(|_| default.to_string()) };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let database_url = require("DATABASE_URL")?;
    let env = parse_environment(&or_default("CAFEHOP_ENV", "development"));
    let bind_addr = parse_addr("CAFEHOP_BIND_ADDR", "0.0.0.0:3000")?;
    let log_level = or_default("CAFEHOP_LOG_LEVEL", "info");
    let yelp_api_key = lookup("YELP_API_KEY").ok().filter(|k| !k.is_empty());

    let overpass_mirrors = match lookup("CAFEHOP_OVERPASS_MIRRORS") {
        Ok(raw) => {
            let mirrors: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|m| !m.is_empty())
                .map(str::to_owned)
                .collect();
            if mirrors.is_empty() {
                return Err(ConfigError::InvalidEnvVar {
                    var: "CAFEHOP_OVERPASS_MIRRORS".to_string(),
                    reason: "no mirror URLs in list".to_string(),
                });
            }
            mirrors
        }
        Err(_) => DEFAULT_OVERPASS_MIRRORS
            .iter()
            .map(|&m| m.to_owned())
            .collect(),
    };

    let overpass_timeout_secs = parse_u64("CAFEHOP_OVERPASS_TIMEOUT_SECS", "8")?;
    let overpass_max_attempts = parse_u32("CAFEHOP_OVERPASS_MAX_ATTEMPTS", "2")?;
    let overpass_backoff_base_ms = parse_u64("CAFEHOP_OVERPASS_BACKOFF_BASE_MS", "400")?;
    let overpass_backoff_step_ms = parse_u64("CAFEHOP_OVERPASS_BACKOFF_STEP_MS", "300")?;
    let yelp_timeout_ms = parse_u64("CAFEHOP_YELP_TIMEOUT_MS", "3500")?;

    let db_max_connections = parse_u32("CAFEHOP_DB_MAX_CONNECTIONS", "10")?;
    let db_min_connections = parse_u32("CAFEHOP_DB_MIN_CONNECTIONS", "1")?;
    let db_acquire_timeout_secs = parse_u64("CAFEHOP_DB_ACQUIRE_TIMEOUT_SECS", "10")?;

    Ok(AppConfig {
        database_url,
        env,
        bind_addr,
        log_level,
        yelp_api_key,
        overpass_mirrors,
        overpass_timeout_secs,
        overpass_max_attempts,
        overpass_backoff_base_ms,
        overpass_backoff_step_ms,
        yelp_timeout_ms,
        db_max_connections,
        db_min_connections,
        db_acquire_timeout_secs,
    })
}

fn parse_environment(raw: &str) -> Environment {
    match raw.to_lowercase().as_str() {
        "production" | "prod" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

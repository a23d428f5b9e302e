use std::path::PathBuf;

use crate::app_config::AppConfig;
use crate::delivery_area::Tenant;
use crate::ConfigError;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:5000/api/delivery-areas";
pub const DEFAULT_DELIVERY_COMPANY: &str = "zr-Express";
pub const DEFAULT_STORE: &str = "AB-Zone";
pub const DEFAULT_CATALOG_PATH: &str = "./config/delivery_areas.yaml";
pub const DEFAULT_USER_AGENT: &str = "areaseed/0.1 (delivery-area-seeding)";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Load application configuration from environment variables already in the process.
///
/// Does NOT load `.env` files; the binary calls `dotenvy::dotenv()` once at
/// startup so every command sees the same environment.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Resolve only the catalog path, for commands that never talk to the API
/// and therefore have no use for a token.
#[must_use]
pub fn catalog_path_from_env() -> PathBuf {
    catalog_path_with(|key| std::env::var(key))
}

/// Resolve the tracing filter directive, for commands that never talk to the API.
#[must_use]
pub fn log_level_from_env() -> String {
    log_level_with(|key| std::env::var(key))
}

fn log_level_with<F>(lookup: F) -> String
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    lookup("AREASEED_LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
}

fn catalog_path_with<F>(lookup: F) -> PathBuf
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let raw = lookup("AREASEED_CATALOG_PATH").unwrap_or_else(|_| DEFAULT_CATALOG_PATH.to_string());
    PathBuf::from(raw)
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require_non_empty = |var: &str| -> Result<String, ConfigError> {
        let value = lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))?;
        if value.trim().is_empty() {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        Ok(value)
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_optional_u64 = |var: &str| -> Result<Option<u64>, ConfigError> {
        match lookup(var) {
            Ok(raw) => raw
                .parse::<u64>()
                .map(Some)
                .map_err(|e| ConfigError::InvalidEnvVar {
                    var: var.to_string(),
                    reason: e.to_string(),
                }),
            Err(_) => Ok(None),
        }
    };

    let api_token = require_non_empty("AREASEED_API_TOKEN")?;

    let endpoint = or_default("AREASEED_ENDPOINT", DEFAULT_ENDPOINT);
    let tenant = Tenant {
        delivery_company: or_default("AREASEED_DELIVERY_COMPANY", DEFAULT_DELIVERY_COMPANY),
        store: or_default("AREASEED_STORE", DEFAULT_STORE),
    };
    let catalog_path = catalog_path_with(&lookup);
    let log_level = log_level_with(&lookup);
    let request_timeout_secs = parse_optional_u64("AREASEED_REQUEST_TIMEOUT_SECS")?;
    let user_agent = or_default("AREASEED_USER_AGENT", DEFAULT_USER_AGENT);

    Ok(AppConfig {
        endpoint,
        api_token,
        tenant,
        catalog_path,
        log_level,
        request_timeout_secs,
        user_agent,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

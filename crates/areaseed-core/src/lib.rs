pub mod app_config;
pub mod catalog;
pub mod config;
pub mod delivery_area;

use thiserror::Error;

pub use app_config::AppConfig;
pub use catalog::{load_catalog, suspect_entries, CatalogFile, DeliveryAreaEntry};
pub use config::{catalog_path_from_env, load_app_config_from_env, log_level_from_env};
pub use delivery_area::{DeliveryAreaPayload, Tenant};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read catalog file {path}: {source}")]
    CatalogFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file: {0}")]
    CatalogFileParse(#[source] serde_yaml::Error),
}

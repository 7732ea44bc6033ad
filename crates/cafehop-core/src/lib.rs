pub mod app_config;
pub mod classifier;
pub mod config;
pub mod place;
pub mod query;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use classifier::is_generic_term;
pub use config::{load_app_config, load_app_config_from_env};
pub use place::{Coordinate, Place};
pub use query::SearchQuery;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

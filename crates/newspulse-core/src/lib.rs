//! Shared configuration and request types for newspulse.

pub mod app_config;
pub mod config;
pub mod query;

pub use app_config::{AppConfig, ContentMode, ScoreTarget, ScorerKind};
pub use config::{
    build_app_config, load_app_config, load_app_config_from_env, MAX_REQUEST_TIMEOUT_SECS,
};
pub use query::{NewsQuery, QueryError, DEFAULT_LIMIT, DEFAULT_MAX_LIMIT};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

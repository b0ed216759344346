use crate::app_config::{AppConfig, ContentMode, ScoreTarget, ScorerKind};
use crate::ConfigError;

/// Upper bound for outbound request timeouts, in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
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
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable
/// development config. Cross-field rules are checked after parsing.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for the first value that fails validation.
pub fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::net::SocketAddr;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_addr = |var: &str, default: &str| -> Result<SocketAddr, ConfigError> {
        or_default(var, default)
            .parse::<SocketAddr>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        or_default(var, default)
            .parse::<u64>()
            .map_err(|e| invalid(var, e.to_string()))
    };

    // Positive integer: zero is rejected along with non-numbers.
    let parse_positive = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let value = or_default(var, default)
            .parse::<usize>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value == 0 {
            return Err(invalid(var, "must be at least 1".to_string()));
        }
        Ok(value)
    };

    let bind_addr = parse_addr("NEWSPULSE_BIND_ADDR", "0.0.0.0:5000")?;
    let log_level = or_default("NEWSPULSE_LOG_LEVEL", "info");

    let feed_url = or_default("NEWSPULSE_FEED_URL", "https://news.google.com/rss/search");
    if !(feed_url.starts_with("http://") || feed_url.starts_with("https://")) {
        return Err(invalid(
            "NEWSPULSE_FEED_URL",
            "must be an http(s) URL".to_string(),
        ));
    }
    let feed_locale = or_default("NEWSPULSE_FEED_LOCALE", "hl=en-US&gl=US&ceid=US:en");

    let request_timeout_secs = parse_u64("NEWSPULSE_REQUEST_TIMEOUT_SECS", "10")?;
    if !(1..=MAX_REQUEST_TIMEOUT_SECS).contains(&request_timeout_secs) {
        return Err(invalid(
            "NEWSPULSE_REQUEST_TIMEOUT_SECS",
            format!("must be between 1 and {MAX_REQUEST_TIMEOUT_SECS}"),
        ));
    }
    let user_agent = or_default("NEWSPULSE_USER_AGENT", "newspulse/0.1 (news-sentiment)");

    let content_mode = or_default("NEWSPULSE_CONTENT_MODE", "headline")
        .parse::<ContentMode>()
        .map_err(|reason| invalid("NEWSPULSE_CONTENT_MODE", reason))?;
    let score_target = or_default("NEWSPULSE_SCORE_TARGET", "title")
        .parse::<ScoreTarget>()
        .map_err(|reason| invalid("NEWSPULSE_SCORE_TARGET", reason))?;
    let scorer = or_default("NEWSPULSE_SCORER", "vader")
        .parse::<ScorerKind>()
        .map_err(|reason| invalid("NEWSPULSE_SCORER", reason))?;

    if score_target == ScoreTarget::Content && content_mode != ContentMode::FullText {
        return Err(invalid(
            "NEWSPULSE_SCORE_TARGET",
            "content scoring requires NEWSPULSE_CONTENT_MODE=full_text".to_string(),
        ));
    }

    let default_limit = parse_positive("NEWSPULSE_DEFAULT_LIMIT", "10")?;
    let max_limit = parse_positive("NEWSPULSE_MAX_LIMIT", "100")?;
    if max_limit < default_limit {
        return Err(invalid(
            "NEWSPULSE_MAX_LIMIT",
            format!("must not be below NEWSPULSE_DEFAULT_LIMIT ({default_limit})"),
        ));
    }
    let fetch_concurrency = parse_positive("NEWSPULSE_FETCH_CONCURRENCY", "1")?;

    Ok(AppConfig {
        bind_addr,
        log_level,
        feed_url,
        feed_locale,
        request_timeout_secs,
        user_agent,
        content_mode,
        score_target,
        scorer,
        default_limit,
        max_limit,
        fetch_concurrency,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use crate::config::Config;
use crate::error::AppError;
use std::net::SocketAddr;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Provider URLs cannot be empty and must use http:// or https://
/// - TheSportsDB key cannot be empty
/// - Season, if set, must look like `2024-25`
/// - Per-mode must be one the stats API understands
/// - Bind address must parse as a socket address
/// - Timeout and attempt budget must be positive
/// - Log file path parent directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    validate_url("stats_api_url", &config.stats_api_url)?;
    validate_url("sportsdb_api_url", &config.sportsdb_api_url)?;

    if config.sportsdb_api_key.trim().is_empty() {
        return Err(AppError::config_error("TheSportsDB API key cannot be empty"));
    }

    if let Some(season) = &config.season {
        validate_season(season)?;
    }

    if !matches!(config.per_mode.as_str(), "Totals" | "PerGame") {
        return Err(AppError::config_error(format!(
            "Unsupported per_mode '{}', expected Totals or PerGame",
            config.per_mode
        )));
    }

    config.bind_address.parse::<SocketAddr>().map_err(|e| {
        AppError::config_error(format!(
            "Invalid bind address '{}': {e}",
            config.bind_address
        ))
    })?;

    if config.http_timeout_seconds == 0 {
        return Err(AppError::config_error("HTTP timeout must be at least 1 second"));
    }

    if config.max_attempts == 0 {
        return Err(AppError::config_error("max_attempts must be at least 1"));
    }

    if let Some(log_path) = &config.log_file_path {
        validate_log_path(log_path)?;
    }

    Ok(())
}

fn validate_url(field: &str, url: &str) -> Result<(), AppError> {
    if url.is_empty() {
        return Err(AppError::config_error(format!("{field} cannot be empty")));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(AppError::config_error(format!(
            "{field} must start with http:// or https://"
        )));
    }

    Ok(())
}

/// Checks a season label such as `2024-25`: the suffix must be the year after the start.
pub fn validate_season(season: &str) -> Result<(), AppError> {
    let invalid = || {
        AppError::config_error(format!(
            "Season '{season}' must use the YYYY-YY format, e.g. 2024-25"
        ))
    };

    let (start, end) = season.split_once('-').ok_or_else(invalid)?;
    if start.len() != 4 || end.len() != 2 {
        return Err(invalid());
    }
    // `u32::from_str` would accept a leading '+'
    if !start.chars().chain(end.chars()).all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let start: u32 = start.parse().map_err(|_| invalid())?;
    let end: u32 = end.parse().map_err(|_| invalid())?;

    if (start + 1) % 100 != end {
        return Err(invalid());
    }

    Ok(())
}

fn validate_log_path(log_path: &str) -> Result<(), AppError> {
    if log_path.is_empty() {
        return Err(AppError::config_error("Log file path cannot be empty"));
    }

    // Try to create the directory to validate the path
    if let Some(parent) = Path::new(log_path).parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            AppError::config_error(format!(
                "Cannot create log directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    Ok(())
}

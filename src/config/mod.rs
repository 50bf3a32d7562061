use crate::constants::{self, env_vars, provider, retry};
use crate::data_fetcher::api::current_season;
use crate::data_fetcher::retry::RetryPolicy;
use crate::error::AppError;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the NBA stats API, without a trailing slash.
    #[serde(default = "default_stats_api_url")]
    pub stats_api_url: String,
    /// Base URL of TheSportsDB v1 JSON API, without a trailing slash.
    #[serde(default = "default_sportsdb_api_url")]
    pub sportsdb_api_url: String,
    #[serde(default = "default_sportsdb_api_key")]
    pub sportsdb_api_key: String,
    /// Season label such as `2024-25`. Derived from today's date when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    /// `Totals` for season aggregates, `PerGame` for per-game averages.
    #[serde(default = "default_per_mode")]
    pub per_mode: String,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 30 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Fixed pause between fetch attempts.
    #[serde(default = "default_retry_delay")]
    pub retry_delay_seconds: u64,
}

fn default_stats_api_url() -> String {
    provider::STATS_API_URL.to_string()
}

fn default_sportsdb_api_url() -> String {
    provider::SPORTSDB_API_URL.to_string()
}

fn default_sportsdb_api_key() -> String {
    provider::SPORTSDB_API_KEY.to_string()
}

fn default_per_mode() -> String {
    provider::PER_MODE.to_string()
}

fn default_bind_address() -> String {
    constants::DEFAULT_BIND_ADDRESS.to_string()
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

fn default_max_attempts() -> u32 {
    retry::MAX_ATTEMPTS
}

fn default_retry_delay() -> u64 {
    retry::DELAY_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stats_api_url: default_stats_api_url(),
            sportsdb_api_url: default_sportsdb_api_url(),
            sportsdb_api_key: default_sportsdb_api_key(),
            season: None,
            per_mode: default_per_mode(),
            bind_address: default_bind_address(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
            max_attempts: default_max_attempts(),
            retry_delay_seconds: default_retry_delay(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// Falls back to defaults when no config file exists.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `HOOPSTATS_STATS_API_URL` - Override the stats provider base URL
    /// - `HOOPSTATS_SPORTSDB_API_URL` / `HOOPSTATS_SPORTSDB_API_KEY` - Team directory provider
    /// - `HOOPSTATS_SEASON` - Override the season label
    /// - `HOOPSTATS_BIND_ADDRESS` - Override the listen address
    /// - `HOOPSTATS_LOG_FILE` - Override log file path
    /// - `HOOPSTATS_HTTP_TIMEOUT` - Override HTTP timeout in seconds
    /// - `HOOPSTATS_MAX_ATTEMPTS` / `HOOPSTATS_RETRY_DELAY` - Retry budget
    ///
    /// The result is not validated: command line overrides still apply on
    /// top of it, so callers validate once they have the final values.
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Config file unreadable or not valid TOML
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Loads configuration from a custom file path without env overrides or validation.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Applies `HOOPSTATS_*` environment variables on top of the current values.
    /// Unparsable numeric values are ignored.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(env_vars::STATS_API_URL) {
            self.stats_api_url = url;
        }

        if let Ok(url) = std::env::var(env_vars::SPORTSDB_API_URL) {
            self.sportsdb_api_url = url;
        }

        if let Ok(key) = std::env::var(env_vars::SPORTSDB_API_KEY) {
            self.sportsdb_api_key = key;
        }

        if let Ok(season) = std::env::var(env_vars::SEASON) {
            self.season = Some(season);
        }

        if let Ok(bind_address) = std::env::var(env_vars::BIND_ADDRESS) {
            self.bind_address = bind_address;
        }

        if let Ok(log_file_path) = std::env::var(env_vars::LOG_FILE) {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = env_number::<u64>(env_vars::HTTP_TIMEOUT) {
            self.http_timeout_seconds = timeout;
        }

        if let Some(attempts) = env_number::<u32>(env_vars::MAX_ATTEMPTS) {
            self.max_attempts = attempts;
        }

        if let Some(delay) = env_number::<u64>(env_vars::RETRY_DELAY) {
            self.retry_delay_seconds = delay;
        }
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Season label to request, falling back to the season in progress today.
    pub fn effective_season(&self) -> String {
        self.season_on(Local::now().date_naive())
    }

    /// Season label to request on `today`.
    pub fn season_on(&self, today: NaiveDate) -> String {
        self.season.clone().unwrap_or_else(|| current_season(today))
    }

    /// Retry budget for the stats fetch.
    pub fn retry_policy(&self) -> Result<RetryPolicy, AppError> {
        RetryPolicy::new(
            self.max_attempts,
            Duration::from_secs(self.retry_delay_seconds),
        )
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and effective settings, env overrides included
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config = Config::load().await?;
        config.validate()?;

        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        if Path::new(&config_path).exists() {
            println!("{config_path}");
        } else {
            println!("{config_path}");
            println!("(Not found, using defaults)");
        }
        println!("────────────────────────────────────");
        println!("Stats API:");
        println!("{}", config.stats_api_url);
        println!("────────────────────────────────────");
        println!("Team Directory API:");
        println!("{}", config.sportsdb_api_url);
        println!("────────────────────────────────────");
        println!("Season:");
        match &config.season {
            Some(season) => println!("{season}"),
            None => println!("{} (current)", config.effective_season()),
        }
        println!("────────────────────────────────────");
        println!("Per Mode:");
        println!("{}", config.per_mode);
        println!("────────────────────────────────────");
        println!("Listen Address:");
        println!("{}", config.bind_address);
        println!("────────────────────────────────────");
        println!("HTTP Timeout:");
        println!("{} seconds", config.http_timeout_seconds);
        println!("────────────────────────────────────");
        println!("Retries:");
        println!(
            "{} attempts, {} seconds apart",
            config.max_attempts, config.retry_delay_seconds
        );
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{}", constants::DEFAULT_LOG_FILE_NAME);
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and strips trailing
    /// slashes from the provider URLs so URL building stays predictable.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }

        let content = toml::to_string_pretty(&Config {
            stats_api_url: self.stats_api_url.trim_end_matches('/').to_string(),
            sportsdb_api_url: self.sportsdb_api_url.trim_end_matches('/').to_string(),
            ..self.clone()
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

fn env_number<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.parse::<T>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    const ALL_ENV_VARS: [&str; 9] = [
        env_vars::STATS_API_URL,
        env_vars::SPORTSDB_API_URL,
        env_vars::SPORTSDB_API_KEY,
        env_vars::SEASON,
        env_vars::BIND_ADDRESS,
        env_vars::LOG_FILE,
        env_vars::HTTP_TIMEOUT,
        env_vars::MAX_ATTEMPTS,
        env_vars::RETRY_DELAY,
    ];

    fn clear_env() {
        for name in ALL_ENV_VARS {
            // SAFETY: env-touching tests run under #[serial]
            unsafe { std::env::remove_var(name) };
        }
    }

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
stats_api_url = "https://stats.example.com"
season = "2023-24"
per_mode = "PerGame"
log_file_path = "/custom/log/path"
max_attempts = 5
"#;
        tokio::fs::write(&config_path, config_content)
            .await
            .unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.stats_api_url, "https://stats.example.com");
        assert_eq!(config.season.as_deref(), Some("2023-24"));
        assert_eq!(config.per_mode, "PerGame");
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.max_attempts, 5);
        // Unlisted fields keep their defaults
        assert_eq!(config.retry_delay_seconds, retry::DELAY_SECONDS);
        assert_eq!(config.sportsdb_api_key, provider::SPORTSDB_API_KEY);
    }

    #[tokio::test]
    async fn test_config_load_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config, Config::default());
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "max_attempts = [").await.unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original = Config {
            stats_api_url: "https://stats.example.com/".to_string(),
            season: Some("2022-23".to_string()),
            log_file_path: Some("/custom/log/path".to_string()),
            ..Config::default()
        };

        original.save_to_path(&config_path_str).await.unwrap();
        assert!(config_path.exists());

        let loaded = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(loaded.stats_api_url, "https://stats.example.com");
        assert_eq!(loaded.season, original.season);
        assert_eq!(loaded.log_file_path, original.log_file_path);
        assert_eq!(loaded.max_attempts, original.max_attempts);
    }

    #[test]
    #[serial]
    fn test_env_overrides_replace_file_values() {
        clear_env();
        // SAFETY: serialized with the other env tests
        unsafe {
            std::env::set_var(env_vars::STATS_API_URL, "http://127.0.0.1:9999");
            std::env::set_var(env_vars::SEASON, "2021-22");
            std::env::set_var(env_vars::MAX_ATTEMPTS, "7");
            std::env::set_var(env_vars::RETRY_DELAY, "0");
        }

        let mut config = Config::default();
        config.apply_env_overrides();
        clear_env();

        assert_eq!(config.stats_api_url, "http://127.0.0.1:9999");
        assert_eq!(config.season.as_deref(), Some("2021-22"));
        assert_eq!(config.max_attempts, 7);
        assert_eq!(config.retry_delay_seconds, 0);
    }

    #[test]
    #[serial]
    fn test_env_overrides_ignore_unparsable_numbers() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::HTTP_TIMEOUT, "soon");
            std::env::set_var(env_vars::MAX_ATTEMPTS, "-1");
        }

        let mut config = Config::default();
        config.apply_env_overrides();
        clear_env();

        assert_eq!(config.http_timeout_seconds, constants::DEFAULT_HTTP_TIMEOUT_SECONDS);
        assert_eq!(config.max_attempts, retry::MAX_ATTEMPTS);
    }

    #[tokio::test]
    #[serial]
    async fn test_load_leaves_invalid_env_values_for_caller() {
        clear_env();
        unsafe {
            std::env::set_var(env_vars::SEASON, "bad");
        }

        let result = Config::load().await;
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.season.as_deref(), Some("bad"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_retry_policy_from_config() {
        let config = Config {
            max_attempts: 4,
            retry_delay_seconds: 1,
            ..Config::default()
        };
        let policy = config.retry_policy().unwrap();
        assert_eq!(policy.max_attempts(), 4);
        assert_eq!(policy.delay(), Duration::from_secs(1));
    }

    #[test]
    fn test_retry_policy_rejects_zero_attempts() {
        let config = Config {
            max_attempts: 0,
            ..Config::default()
        };
        assert!(config.retry_policy().is_err());
    }

    #[test]
    fn test_effective_season_prefers_explicit_value() {
        let config = Config {
            season: Some("2019-20".to_string()),
            ..Config::default()
        };
        assert_eq!(config.effective_season(), "2019-20");
    }

    #[test]
    fn test_season_on_follows_calendar_when_unset() {
        let config = Config::default();
        let june = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
        let november = NaiveDate::from_ymd_opt(2026, 11, 1).unwrap();
        assert_eq!(config.season_on(june), "2025-26");
        assert_eq!(config.season_on(november), "2026-27");

        let pinned = Config {
            season: Some("2019-20".to_string()),
            ..Config::default()
        };
        assert_eq!(pinned.season_on(november), "2019-20");
    }

    #[test]
    fn test_effective_season_defaults_to_current() {
        let config = Config::default();
        let season = config.effective_season();
        assert!(validation::validate_season(&season).is_ok(), "got {season}");
    }
}

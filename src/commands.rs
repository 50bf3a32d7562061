use crate::cli::Args;
use hoopstats::config::Config;
use hoopstats::config::validation::validate_season;
use hoopstats::constants::messages;
use hoopstats::error::AppError;
use hoopstats::server::{self, AppState, StatsPage, build_stats_page};
use std::net::SocketAddr;
use tracing::{info, warn};

/// Validates command line arguments before anything is loaded.
///
/// Returns an error if a value can't be used or flags conflict.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if [args.once, args.list_config, args.save_config]
        .into_iter()
        .filter(|set| *set)
        .count()
        > 1
    {
        return Err(AppError::config_error(
            "Use only one of --once, --list-config and --save-config",
        ));
    }
    if let Some(bind) = &args.bind
        && bind.parse::<SocketAddr>().is_err()
    {
        return Err(AppError::config_error(format!(
            "Invalid bind address '{bind}', expected HOST:PORT such as 127.0.0.1:5000"
        )));
    }
    if let Some(season) = &args.season {
        validate_season(season)?;
    }
    Ok(())
}

/// Command line values win over the config file and environment.
pub fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(bind) = &args.bind {
        config.bind_address = bind.clone();
    }
    if let Some(season) = &args.season {
        config.season = Some(season.clone());
    }
    if let Some(log_file) = &args.log_file {
        config.log_file_path = Some(log_file.clone());
    }
}

/// Loads config (file, then environment), applies CLI overrides and validates the result.
///
/// This is the only validation on the startup path, so a bad file or
/// environment value is fine as long as the command line replaces it.
pub async fn load_config(args: &Args) -> Result<Config, AppError> {
    let mut config = Config::load().await?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles the --save-config command.
///
/// Writes the effective settings (file, environment and command line merged)
/// so later runs pick them up without the overrides.
pub async fn handle_save_config_command(config: &Config, path: &str) -> Result<(), AppError> {
    config.save_to_path(path).await?;
    println!("Config saved to {path}");
    Ok(())
}

/// Handles the --once command.
///
/// Fetches with the configured retries and prints either the page HTML or
/// the no-data message, then exits.
pub async fn handle_once_command(config: Config) -> Result<(), AppError> {
    let state = AppState::from_config(config)?;

    match build_stats_page(&state).await {
        StatsPage::Table(html) => {
            info!("Rendered stats page for {}", state.season());
            println!("{html}");
        }
        StatsPage::Unavailable(reason) => {
            warn!("No data available: {reason:?}");
            println!("{}", messages::NO_DATA);
        }
    }

    Ok(())
}

/// Runs the web server until Ctrl+C.
pub async fn run_server(config: Config) -> Result<(), AppError> {
    let state = AppState::from_config(config)?;
    server::serve(state).await
}

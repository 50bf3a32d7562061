// src/main.rs
mod cli;
mod commands;

use clap::Parser;
use cli::Args;
use hoopstats::config::Config;
use hoopstats::error::AppError;
use hoopstats::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    commands::validate_args(&args)?;

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    // Load config first to fail early if there's an issue
    let config = commands::load_config(&args).await?;

    if args.save_config {
        return commands::handle_save_config_command(&config, &Config::get_config_path()).await;
    }

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (log_file_path, _guard) =
        setup_logging(config.log_file_path.as_deref(), args.echo_logs_to_stdout()).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    if args.once {
        return commands::handle_once_command(config).await;
    }

    commands::run_server(config).await
}

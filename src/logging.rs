use crate::config::Config;
use crate::constants::DEFAULT_LOG_FILE_NAME;
use crate::error::AppError;
use std::io::stdout;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::format::{DefaultFields, Format};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_DIRECTIVE: &str = "hoopstats=info";

/// Splits a log file path into directory and file name.
///
/// Without a custom path the platform default location is used. A path that
/// ends in a separator keeps the default file name.
pub fn resolve_log_location(custom_path: Option<&str>) -> (String, String) {
    match custom_path {
        Some(custom_path) => {
            let path = Path::new(custom_path);
            let parent = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(Path::new("."));
            let file_name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or(DEFAULT_LOG_FILE_NAME);
            (parent.to_string_lossy().to_string(), file_name.to_string())
        }
        None => (Config::get_log_dir_path(), DEFAULT_LOG_FILE_NAME.to_string()),
    }
}

/// Formatting shared by every log file layer: timestamp, level and message,
/// no ANSI colors and no target.
pub(crate) fn file_format<S, W>(writer: W) -> fmt::Layer<S, DefaultFields, Format, W>
where
    W: for<'w> MakeWriter<'w> + 'static,
{
    fmt::Layer::new()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
}

fn env_filter() -> Result<EnvFilter, AppError> {
    let directive: Directive = DEFAULT_DIRECTIVE
        .parse()
        .map_err(|e| AppError::log_setup_error(format!("Invalid log directive: {e}")))?;
    Ok(EnvFilter::from_default_env().add_directive(directive))
}

/// Installs the global subscriber.
///
/// Log lines are appended to a single file that never rotates. With
/// `echo_stdout` a second layer also writes them to the terminal.
///
/// Returns the log file path and the guard that must be kept alive
/// for the duration of the program to ensure proper log flushing.
pub async fn setup_logging(
    log_file: Option<&str>,
    echo_stdout: bool,
) -> Result<(String, WorkerGuard), AppError> {
    let (log_dir, log_file_name) = resolve_log_location(log_file);

    if !Path::new(&log_dir).exists() {
        tokio::fs::create_dir_all(&log_dir).await.map_err(|e| {
            AppError::log_setup_error(format!("Failed to create log directory: {e}"))
        })?;
    }

    let file_appender = tracing_appender::rolling::never(&log_dir, &log_file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = file_format(non_blocking).with_filter(env_filter()?);

    let stdout_layer = if echo_stdout {
        Some(
            fmt::Layer::new()
                .with_writer(stdout)
                .with_ansi(true)
                .with_target(false)
                .with_filter(env_filter()?),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .try_init()
        .map_err(|e| AppError::log_setup_error(format!("Failed to install subscriber: {e}")))?;

    let log_file_path = Path::new(&log_dir)
        .join(&log_file_name)
        .to_string_lossy()
        .to_string();
    Ok((log_file_path, guard))
}

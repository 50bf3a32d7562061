use std::path::Path;

/// Returns the platform-specific path for the config file.
///
/// # Returns
/// String containing the absolute path to the config file
///
/// # Notes
/// - Uses platform-specific config directory (e.g., ~/.config on Linux)
/// - Falls back to current directory if config directory is unavailable
pub fn get_config_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("hoopstats")
        .join("config.toml")
        .to_string_lossy()
        .to_string()
}

/// Returns the platform-specific path for the log directory.
pub fn get_log_dir_path() -> String {
    dirs::config_dir()
        .unwrap_or_else(|| Path::new(".").to_path_buf())
        .join("hoopstats")
        .join("logs")
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_ends_with_app_file() {
        let path = get_config_path();
        let path = Path::new(&path);
        assert!(path.ends_with(Path::new("hoopstats").join("config.toml")));
    }

    #[test]
    fn test_log_dir_is_sibling_of_config() {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();
        let config_parent = Path::new(&config_path).parent().unwrap();
        assert_eq!(Path::new(&log_dir).parent().unwrap(), config_parent);
    }
}

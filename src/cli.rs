use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// NBA team stats web page
///
/// Serves a table of NBA team statistics (wins, losses, win percentage, points)
/// fetched from the NBA stats API, plus a team directory at /nba-teams.
///
/// The stats fetch is retried a few times with a fixed delay. When no data can
/// be fetched the page shows a short "no data" message instead of the table.
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Fetch the stats once, print the page HTML to stdout and exit.
    #[arg(short, long)]
    pub once: bool,

    /// Address to listen on, e.g. 0.0.0.0:8080. Overrides the config file.
    #[arg(short, long, value_name = "ADDR", help_heading = "Server")]
    pub bind: Option<String>,

    /// Season to show in YYYY-YY format, e.g. 2024-25.
    /// If not provided, the season in progress today is used.
    #[arg(short, long, help_heading = "Server")]
    pub season: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Write the effective configuration (config file, environment and these flags)
    /// to the config file location, then exit.
    #[arg(long = "save-config", help_heading = "Configuration")]
    pub save_config: bool,

    /// Echo log output to the terminal as well as the log file.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}

impl Args {
    /// Log lines go to stdout only when they can't mix with page output.
    pub fn echo_logs_to_stdout(&self) -> bool {
        self.debug && !self.once && !self.list_config && !self.save_config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_server_mode() {
        let args = Args::try_parse_from(["hoopstats"]).unwrap();
        assert!(!args.once);
        assert!(args.bind.is_none());
        assert!(args.season.is_none());
        assert!(!args.echo_logs_to_stdout());
    }

    #[test]
    fn test_parses_all_flags() {
        let args = Args::try_parse_from([
            "hoopstats",
            "-o",
            "-b",
            "0.0.0.0:8080",
            "-s",
            "2023-24",
            "--log-file",
            "/tmp/hoop.log",
            "--debug",
        ])
        .unwrap();

        assert!(args.once);
        assert_eq!(args.bind.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(args.season.as_deref(), Some("2023-24"));
        assert_eq!(args.log_file.as_deref(), Some("/tmp/hoop.log"));
        assert!(args.debug);
        assert!(!args.save_config);
    }

    #[test]
    fn test_save_config_flag() {
        let args = Args::try_parse_from(["hoopstats", "--save-config", "-s", "2023-24"]).unwrap();
        assert!(args.save_config);
        assert!(!args.echo_logs_to_stdout());
    }

    #[test]
    fn test_once_keeps_stdout_clean() {
        let args = Args::try_parse_from(["hoopstats", "--once", "--debug"]).unwrap();
        assert!(!args.echo_logs_to_stdout());

        let args = Args::try_parse_from(["hoopstats", "--debug"]).unwrap();
        assert!(args.echo_logs_to_stdout());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        assert!(Args::try_parse_from(["hoopstats", "--compact"]).is_err());
    }
}

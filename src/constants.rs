//! Application-wide constants and configuration values
//!
//! Defaults, environment variable names and the user-visible messages live
//! here so handlers, config and tests agree on them.

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default address the web server binds to
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Default log file name inside the log directory
pub const DEFAULT_LOG_FILE_NAME: &str = "hoopstats.log";

/// Retry configuration for the stats fetch
pub mod retry {
    /// Maximum number of attempts per page view
    pub const MAX_ATTEMPTS: u32 = 3;

    /// Fixed delay between attempts (seconds)
    pub const DELAY_SECONDS: u64 = 2;
}

/// External provider defaults
pub mod provider {
    /// Base URL of the NBA stats API
    pub const STATS_API_URL: &str = "https://stats.nba.com/stats";

    /// Resource name for league-wide team stats
    pub const TEAM_STATS_RESOURCE: &str = "leaguedashteamstats";

    /// League identifier for the NBA
    pub const LEAGUE_ID: &str = "00";

    pub const SEASON_TYPE: &str = "Regular Season";

    pub const MEASURE_TYPE: &str = "Base";

    /// Default per-mode; season totals
    pub const PER_MODE: &str = "Totals";

    /// Month (1-12) in which a new NBA season begins
    pub const SEASON_START_MONTH: u32 = 10;

    /// Base URL of TheSportsDB v1 JSON API
    pub const SPORTSDB_API_URL: &str = "https://www.thesportsdb.com/api/v1/json";

    /// TheSportsDB public test key
    pub const SPORTSDB_API_KEY: &str = "3";

    /// League name TheSportsDB uses for the NBA
    pub const SPORTSDB_LEAGUE: &str = "NBA";

    /// User agent sent to providers; stats.nba.com rejects bare clients
    pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";

    pub const REFERER: &str = "https://www.nba.com/";

    pub const ORIGIN: &str = "https://www.nba.com";
}

/// Column names that must be present in the team stats result set
pub mod columns {
    pub const TEAM_NAME: &str = "TEAM_NAME";
    pub const WINS: &str = "W";
    pub const LOSSES: &str = "L";
    pub const WIN_PCT: &str = "W_PCT";
    pub const POINTS: &str = "PTS";

    pub const REQUIRED: [&str; 5] = [TEAM_NAME, WINS, LOSSES, WIN_PCT, POINTS];
}

/// Messages returned to the browser
pub mod messages {
    pub const NO_DATA: &str = "Error: No data available at the moment. Please try again later.";

    pub const UNEXPECTED_FAILURE: &str = "Error: Something went wrong while fetching NBA data.";

    pub const NO_TEAMS: &str = "No NBA teams data available.";

    pub const TEAMS_FETCH_ERROR_PREFIX: &str = "Error fetching NBA team data";
}

/// Environment variable names
pub mod env_vars {
    pub const STATS_API_URL: &str = "HOOPSTATS_STATS_API_URL";

    pub const SPORTSDB_API_URL: &str = "HOOPSTATS_SPORTSDB_API_URL";

    pub const SPORTSDB_API_KEY: &str = "HOOPSTATS_SPORTSDB_API_KEY";

    /// Season override in YYYY-YY format
    pub const SEASON: &str = "HOOPSTATS_SEASON";

    pub const BIND_ADDRESS: &str = "HOOPSTATS_BIND_ADDRESS";

    /// Environment variable for log file path override
    pub const LOG_FILE: &str = "HOOPSTATS_LOG_FILE";

    /// HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "HOOPSTATS_HTTP_TIMEOUT";

    pub const MAX_ATTEMPTS: &str = "HOOPSTATS_MAX_ATTEMPTS";

    /// Delay between fetch attempts in seconds
    pub const RETRY_DELAY: &str = "HOOPSTATS_RETRY_DELAY";
}

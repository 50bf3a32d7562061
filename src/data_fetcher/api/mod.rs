pub mod fetch_utils;
pub mod http_client;
pub mod season;
pub mod stats_api;
pub mod teams_api;
pub mod urls;

// Re-export URL utilities
pub use urls::*;
// Re-export HTTP client utilities
pub use http_client::create_http_client_with_timeout;
pub use season::{current_season, season_label};
pub use stats_api::NbaStatsClient;
pub use teams_api::fetch_nba_teams;

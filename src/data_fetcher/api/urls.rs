//! URL building utilities for API endpoints

use crate::constants::provider;
use crate::error::AppError;
use reqwest::Url;

/// Builds the league-wide team stats URL for a season.
///
/// # Arguments
/// * `stats_api_url` - Base URL of the stats API
/// * `season` - Season label, e.g. `2024-25`
/// * `per_mode` - `Totals` or `PerGame`
///
/// # Example
/// ```
/// use hoopstats::data_fetcher::api::build_team_stats_url;
///
/// let url = build_team_stats_url("https://stats.example.com", "2024-25", "Totals").unwrap();
/// assert!(url.starts_with("https://stats.example.com/leaguedashteamstats?"));
/// assert!(url.contains("Season=2024-25"));
/// assert!(url.contains("SeasonType=Regular+Season"));
/// ```
pub fn build_team_stats_url(
    stats_api_url: &str,
    season: &str,
    per_mode: &str,
) -> Result<String, AppError> {
    let base = format!(
        "{}/{}",
        stats_api_url.trim_end_matches('/'),
        provider::TEAM_STATS_RESOURCE
    );
    let url = Url::parse_with_params(
        &base,
        &[
            ("LeagueID", provider::LEAGUE_ID),
            ("Season", season),
            ("SeasonType", provider::SEASON_TYPE),
            ("MeasureType", provider::MEASURE_TYPE),
            ("PerMode", per_mode),
        ],
    )
    .map_err(|e| AppError::config_error(format!("Invalid stats API URL '{base}': {e}")))?;

    Ok(url.to_string())
}

/// Builds TheSportsDB URL listing every team in a league.
///
/// # Example
/// ```
/// use hoopstats::data_fetcher::api::build_teams_url;
///
/// let url = build_teams_url("https://www.thesportsdb.com/api/v1/json", "3", "NBA");
/// assert_eq!(url, "https://www.thesportsdb.com/api/v1/json/3/search_all_teams.php?l=NBA");
/// ```
pub fn build_teams_url(sportsdb_api_url: &str, api_key: &str, league: &str) -> String {
    format!(
        "{}/{api_key}/search_all_teams.php?l={league}",
        sportsdb_api_url.trim_end_matches('/')
    )
}

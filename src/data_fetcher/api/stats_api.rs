//! NBA stats API client: one attempt per call, no retries

use crate::config::Config;
use crate::data_fetcher::fetcher::StatsProvider;
use crate::data_fetcher::models::{LeagueDashResponse, TeamStatRecord};
use crate::error::AppError;
use chrono::{Local, NaiveDate};
use futures::FutureExt;
use futures::future::BoxFuture;
use reqwest::Client;
use tracing::debug;

use super::fetch_utils::fetch;
use super::season::current_season;
use super::urls::build_team_stats_url;

/// Fetches `leaguedashteamstats` for one per-mode.
///
/// The season is either pinned or follows the calendar, in which case it is
/// worked out again on every fetch so a long-running server moves on to the
/// new season in October.
#[derive(Debug, Clone)]
pub struct NbaStatsClient {
    client: Client,
    stats_api_url: String,
    per_mode: String,
    season: Option<String>,
}

impl NbaStatsClient {
    /// Client pinned to `season`.
    pub fn new(
        client: Client,
        stats_api_url: &str,
        season: &str,
        per_mode: &str,
    ) -> Result<Self, AppError> {
        build_team_stats_url(stats_api_url, season, per_mode)?;
        Ok(Self {
            client,
            stats_api_url: stats_api_url.to_string(),
            per_mode: per_mode.to_string(),
            season: Some(season.to_string()),
        })
    }

    /// Client that always asks for the season in progress.
    pub fn following_current_season(
        client: Client,
        stats_api_url: &str,
        per_mode: &str,
    ) -> Result<Self, AppError> {
        let mut stats_client = Self::new(
            client,
            stats_api_url,
            &current_season(Local::now().date_naive()),
            per_mode,
        )?;
        stats_client.season = None;
        Ok(stats_client)
    }

    pub fn from_config(client: Client, config: &Config) -> Result<Self, AppError> {
        match &config.season {
            Some(season) => Self::new(client, &config.stats_api_url, season, &config.per_mode),
            None => Self::following_current_season(client, &config.stats_api_url, &config.per_mode),
        }
    }

    /// Season requested on `today`.
    pub fn season_on(&self, today: NaiveDate) -> String {
        self.season
            .clone()
            .unwrap_or_else(|| current_season(today))
    }

    /// Request URL on `today`.
    pub fn url_on(&self, today: NaiveDate) -> Result<String, AppError> {
        build_team_stats_url(&self.stats_api_url, &self.season_on(today), &self.per_mode)
    }

    pub fn url(&self) -> Result<String, AppError> {
        self.url_on(Local::now().date_naive())
    }

    pub async fn fetch_records(&self) -> Result<Vec<TeamStatRecord>, AppError> {
        let url = self.url()?;
        let response: LeagueDashResponse = fetch(&self.client, &url).await?;
        let records = response.into_team_stats(&url)?;
        debug!("Parsed {} team rows", records.len());
        Ok(records)
    }
}

impl StatsProvider for NbaStatsClient {
    fn fetch_team_stats(&self) -> BoxFuture<'_, Result<Vec<TeamStatRecord>, AppError>> {
        self.fetch_records().boxed()
    }
}

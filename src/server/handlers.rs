use super::{AppState, StatsPage, build_stats_page};
use crate::constants::messages;
use crate::data_fetcher::api::fetch_nba_teams;
use crate::presentation::render_teams_page;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Response};
use tracing::{error, info, warn};

/// `GET /`: the stats table, or a plain-text message when no data can be shown.
///
/// The page is built on its own task so a panic while fetching or rendering
/// turns into the generic failure message instead of a dropped connection.
pub async fn stats_handler(State(state): State<AppState>) -> Response {
    let page = tokio::spawn(async move { build_stats_page(&state).await }).await;

    match page {
        Ok(StatsPage::Table(html)) => Html(html).into_response(),
        Ok(StatsPage::Unavailable(reason)) => {
            warn!("No data available for the stats page: {reason:?}");
            messages::NO_DATA.into_response()
        }
        Err(e) => {
            error!("Unexpected failure while building the stats page: {e}");
            messages::UNEXPECTED_FAILURE.into_response()
        }
    }
}

/// `GET /nba-teams`: the team directory. One attempt, no retries.
pub async fn teams_handler(State(state): State<AppState>) -> Response {
    match fetch_nba_teams(state.client(), state.config()).await {
        Ok(teams) if teams.is_empty() => messages::NO_TEAMS.into_response(),
        Ok(teams) => {
            info!("Rendering {} teams", teams.len());
            Html(render_teams_page(&teams)).into_response()
        }
        Err(e) => {
            error!("Team directory fetch failed: {e}");
            format!("{}: {e}", messages::TEAMS_FETCH_ERROR_PREFIX).into_response()
        }
    }
}

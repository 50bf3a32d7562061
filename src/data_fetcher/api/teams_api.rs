//! TheSportsDB team directory lookup. Single attempt; failures go straight to the page.

use crate::config::Config;
use crate::constants::provider;
use crate::data_fetcher::models::{SportsDbTeamsResponse, TeamProfile};
use crate::error::AppError;
use reqwest::Client;
use tracing::{info, warn};

use super::fetch_utils::fetch;
use super::urls::build_teams_url;

/// Lists the NBA's teams. An empty vector means the provider knows no teams.
pub async fn fetch_nba_teams(client: &Client, config: &Config) -> Result<Vec<TeamProfile>, AppError> {
    let url = build_teams_url(
        &config.sportsdb_api_url,
        &config.sportsdb_api_key,
        provider::SPORTSDB_LEAGUE,
    );
    let response: SportsDbTeamsResponse = fetch(client, &url).await?;

    let teams: Vec<TeamProfile> = response
        .teams
        .unwrap_or_default()
        .into_iter()
        .map(TeamProfile::from)
        .collect();

    if teams.is_empty() {
        warn!("Team directory returned no teams (URL: {url})");
    } else {
        info!("Team directory returned {} teams", teams.len());
    }

    Ok(teams)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::testing_utils::TestDataBuilder;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{method, path, query_param},
    };

    fn config_for(server: &MockServer) -> Config {
        Config {
            sportsdb_api_url: server.uri(),
            sportsdb_api_key: "123".to_string(),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_nba_teams_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/123/search_all_teams.php"))
            .and(query_param("l", "NBA"))
            .respond_with(ResponseTemplate::new(200).set_body_json(
                TestDataBuilder::sportsdb_teams_json(&["Boston Celtics", "Miami Heat"]),
            ))
            .mount(&mock_server)
            .await;

        let teams = fetch_nba_teams(&create_test_http_client(), &config_for(&mock_server))
            .await
            .unwrap();

        let names: Vec<&str> = teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Boston Celtics", "Miami Heat"]);
        assert_eq!(teams[0].stadium.as_deref(), Some("Arena"));
    }

    #[tokio::test]
    async fn test_fetch_nba_teams_null_list() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/123/search_all_teams.php"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"teams": null}"#))
            .mount(&mock_server)
            .await;

        let teams = fetch_nba_teams(&create_test_http_client(), &config_for(&mock_server))
            .await
            .unwrap();
        assert!(teams.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_nba_teams_not_found() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let result = fetch_nba_teams(&create_test_http_client(), &config_for(&mock_server)).await;
        assert!(matches!(result, Err(AppError::ApiNotFound { .. })));
    }
}

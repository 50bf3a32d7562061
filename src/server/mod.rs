//! Web surface: application state, routes and the serve loop.

pub mod handlers;

use crate::config::Config;
use crate::data_fetcher::api::{NbaStatsClient, create_http_client_with_timeout};
use crate::data_fetcher::fetch_log::{FetchLogger, TracingLogger};
use crate::data_fetcher::fetcher::{FetchResult, StatsFetcher, StatsProvider, UnavailableReason};
use crate::data_fetcher::retry::{RetryPolicy, Sleeper, TokioSleeper};
use crate::error::AppError;
use crate::presentation::{project, render_stats_page};
use axum::Router;
use axum::routing::get;
use reqwest::Client;
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub use handlers::{stats_handler, teams_handler};

/// Everything a request needs. Cheap to clone; nothing in it is mutated after startup.
#[derive(Clone)]
pub struct AppState {
    config: Arc<Config>,
    client: Client,
    fetcher: StatsFetcher,
    policy: RetryPolicy,
}

impl AppState {
    /// Production wiring: NBA stats client, tracing log sink, tokio sleeper.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        let provider = NbaStatsClient::from_config(client.clone(), &config)?;
        Self::with_parts(
            config,
            client,
            Arc::new(provider),
            Arc::new(TracingLogger),
            Arc::new(TokioSleeper),
        )
    }

    /// Wiring with caller-supplied fetch dependencies.
    pub fn with_parts(
        config: Config,
        client: Client,
        provider: Arc<dyn StatsProvider>,
        logger: Arc<dyn FetchLogger>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Result<Self, AppError> {
        let policy = config.retry_policy()?;
        Ok(Self {
            config: Arc::new(config),
            client,
            fetcher: StatsFetcher::new(provider, logger, sleeper),
            policy,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Season shown right now. Recomputed on each call unless the config pins one.
    pub fn season(&self) -> String {
        self.config.effective_season()
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

/// Outcome of building the stats page for one request.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsPage {
    Table(String),
    Unavailable(UnavailableReason),
}

/// Fetches with retries and renders the table when data is available.
pub async fn build_stats_page(state: &AppState) -> StatsPage {
    match state.fetcher.fetch(&state.policy).await {
        FetchResult::Available(records) => {
            let rows = project(&records);
            StatsPage::Table(render_stats_page(&rows, &state.season()))
        }
        FetchResult::Unavailable(reason) => StatsPage::Unavailable(reason),
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(stats_handler))
        .route("/nba-teams", get(teams_handler))
        .with_state(state)
}

/// Serves on an already bound listener until `shutdown` resolves.
pub async fn serve_on<F>(listener: TcpListener, state: AppState, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Binds the configured address and serves until Ctrl+C.
pub async fn serve(state: AppState) -> Result<(), AppError> {
    let listener = TcpListener::bind(&state.config.bind_address).await?;
    info!(
        "Serving NBA team stats for {} on http://{}",
        state.season(),
        listener.local_addr()?
    );
    info!(
        "Stats fetch: {} attempts, {:?} apart, up to {:?} waiting per request",
        state.policy.max_attempts(),
        state.policy.delay(),
        state.policy.worst_case_wait()
    );

    serve_on(listener, state, shutdown_signal()).await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

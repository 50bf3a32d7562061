pub mod api;
pub mod fetch_log;
pub mod fetcher;
pub mod models;
pub mod retry;

pub use api::{NbaStatsClient, fetch_nba_teams};
pub use fetch_log::{FetchLogger, Severity, TracingLogger};
pub use fetcher::{AttemptOutcome, FetchResult, StatsFetcher, StatsProvider, UnavailableReason};
pub use models::{TeamProfile, TeamStatRecord};
pub use retry::{RetryPolicy, Sleeper, TokioSleeper};

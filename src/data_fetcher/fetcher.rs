//! Bounded-retry fetch of the season's team stats.
//!
//! Each attempt is classified into an [`AttemptOutcome`] and the loop drives
//! on that tag:
//!
//! - `Records` ends the fetch with [`FetchResult::Available`]
//! - `Empty` ends the fetch with [`UnavailableReason::EmptyDataset`]; the
//!   provider answered, so asking again would not help
//! - `Fault` is logged and retried after the policy delay until the budget
//!   runs out, then the fetch ends with [`UnavailableReason::RetriesExhausted`]

use crate::data_fetcher::fetch_log::{FetchLogger, Severity};
use crate::data_fetcher::models::TeamStatRecord;
use crate::data_fetcher::retry::{RetryPolicy, Sleeper};
use crate::error::AppError;
use futures::future::BoxFuture;
use std::sync::Arc;

/// Source of one attempt's worth of records.
pub trait StatsProvider: Send + Sync {
    fn fetch_team_stats(&self) -> BoxFuture<'_, Result<Vec<TeamStatRecord>, AppError>>;
}

/// Classification of a single attempt.
#[derive(Debug)]
pub enum AttemptOutcome {
    Records(Vec<TeamStatRecord>),
    Empty,
    Fault(AppError),
}

impl From<Result<Vec<TeamStatRecord>, AppError>> for AttemptOutcome {
    fn from(result: Result<Vec<TeamStatRecord>, AppError>) -> Self {
        match result {
            Ok(records) if records.is_empty() => AttemptOutcome::Empty,
            Ok(records) => AttemptOutcome::Records(records),
            Err(error) => AttemptOutcome::Fault(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    /// Provider was reachable but returned no teams
    EmptyDataset,
    /// Every attempt faulted
    RetriesExhausted { attempts: u32, last_error: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    /// Non-empty, in provider order
    Available(Vec<TeamStatRecord>),
    Unavailable(UnavailableReason),
}

impl FetchResult {
    pub fn is_available(&self) -> bool {
        matches!(self, FetchResult::Available(_))
    }

    pub fn records(&self) -> Option<&[TeamStatRecord]> {
        match self {
            FetchResult::Available(records) => Some(records),
            FetchResult::Unavailable(_) => None,
        }
    }
}

/// Runs the retry loop against an injected provider, log sink and sleeper.
#[derive(Clone)]
pub struct StatsFetcher {
    provider: Arc<dyn StatsProvider>,
    logger: Arc<dyn FetchLogger>,
    sleeper: Arc<dyn Sleeper>,
}

impl StatsFetcher {
    pub fn new(
        provider: Arc<dyn StatsProvider>,
        logger: Arc<dyn FetchLogger>,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            provider,
            logger,
            sleeper,
        }
    }

    /// Performs one attempt and classifies it.
    pub async fn attempt(&self) -> AttemptOutcome {
        self.provider.fetch_team_stats().await.into()
    }

    /// Fetches the season's team stats, retrying faults up to the policy's budget.
    ///
    /// Waits `policy.delay()` after each fault except the last, so an
    /// all-fault run sleeps `max_attempts - 1` times.
    pub async fn fetch(&self, policy: &RetryPolicy) -> FetchResult {
        let max_attempts = policy.max_attempts();
        let mut last_error = String::new();

        for attempt in 1..=max_attempts {
            match self.attempt().await {
                AttemptOutcome::Records(records) => {
                    self.logger.log(
                        Severity::Info,
                        &format!(
                            "Data fetched successfully on attempt {attempt} ({} teams)",
                            records.len()
                        ),
                    );
                    return FetchResult::Available(records);
                }
                AttemptOutcome::Empty => {
                    self.logger.log(
                        Severity::Warning,
                        &format!("Fetched data is empty on attempt {attempt}, not retrying"),
                    );
                    return FetchResult::Unavailable(UnavailableReason::EmptyDataset);
                }
                AttemptOutcome::Fault(error) => {
                    self.logger.log(
                        Severity::Error,
                        &format!(
                            "Error fetching data ({} fault, attempt {attempt}/{max_attempts}): {error}",
                            error.fault_kind()
                        ),
                    );
                    last_error = error.to_string();

                    if attempt < max_attempts {
                        self.logger.log(
                            Severity::Debug,
                            &format!(
                                "Retrying in {:?} ({attempt}/{max_attempts})",
                                policy.delay()
                            ),
                        );
                        self.sleeper.sleep(policy.delay()).await;
                    }
                }
            }
        }

        self.logger.log(
            Severity::Critical,
            &format!("Failed to fetch data after {max_attempts} attempts"),
        );
        FetchResult::Unavailable(UnavailableReason::RetriesExhausted {
            attempts: max_attempts,
            last_error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::{RecordingLogger, RecordingSleeper, ScriptedProvider, TestDataBuilder};
    use std::time::Duration;

    fn fetcher_with(
        provider: &Arc<ScriptedProvider>,
        logger: &Arc<RecordingLogger>,
        sleeper: &Arc<RecordingSleeper>,
    ) -> StatsFetcher {
        StatsFetcher::new(provider.clone(), logger.clone(), sleeper.clone())
    }

    fn policy(max_attempts: u32) -> RetryPolicy {
        RetryPolicy::new(max_attempts, Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn test_first_success_short_circuits() {
        for max_attempts in 1..=5 {
            let provider = Arc::new(ScriptedProvider::new(vec![
                Ok(TestDataBuilder::league(3)),
                Ok(TestDataBuilder::league(4)),
            ]));
            let logger = Arc::new(RecordingLogger::default());
            let sleeper = Arc::new(RecordingSleeper::default());

            let result = fetcher_with(&provider, &logger, &sleeper)
                .fetch(&policy(max_attempts))
                .await;

            assert_eq!(result.records().map(<[_]>::len), Some(3));
            assert_eq!(provider.calls(), 1);
            assert_eq!(logger.count(Severity::Info), 1);
            assert_eq!(logger.count(Severity::Error), 0);
            assert!(sleeper.sleeps().is_empty());
        }
    }

    #[tokio::test]
    async fn test_all_faults_exhaust_budget() {
        for max_attempts in 1..=4u32 {
            let outcomes = (0..max_attempts)
                .map(|_| Err(AppError::api_server_error(500, "boom", "http://test")))
                .collect();
            let provider = Arc::new(ScriptedProvider::new(outcomes));
            let logger = Arc::new(RecordingLogger::default());
            let sleeper = Arc::new(RecordingSleeper::default());

            let result = fetcher_with(&provider, &logger, &sleeper)
                .fetch(&policy(max_attempts))
                .await;

            match result {
                FetchResult::Unavailable(UnavailableReason::RetriesExhausted {
                    attempts,
                    last_error,
                }) => {
                    assert_eq!(attempts, max_attempts);
                    assert!(last_error.contains("500"));
                }
                other => panic!("expected exhaustion, got {other:?}"),
            }
            assert_eq!(provider.calls(), max_attempts as usize);
            assert_eq!(logger.count(Severity::Error), max_attempts as usize);
            assert_eq!(logger.count(Severity::Critical), 1);
            assert_eq!(sleeper.sleeps().len(), (max_attempts - 1) as usize);
            assert!(sleeper.sleeps().iter().all(|d| *d == Duration::from_secs(2)));
        }
    }

    #[tokio::test]
    async fn test_empty_first_attempt_is_not_retried() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            Ok(vec![]),
            Ok(TestDataBuilder::league(30)),
        ]));
        let logger = Arc::new(RecordingLogger::default());
        let sleeper = Arc::new(RecordingSleeper::default());

        let result = fetcher_with(&provider, &logger, &sleeper)
            .fetch(&policy(3))
            .await;

        assert_eq!(
            result,
            FetchResult::Unavailable(UnavailableReason::EmptyDataset)
        );
        assert_eq!(provider.calls(), 1);
        assert_eq!(logger.count(Severity::Warning), 1);
        assert_eq!(logger.entries().len(), 1);
        assert!(sleeper.sleeps().is_empty());
    }

    #[tokio::test]
    async fn test_empty_after_fault_stops_early() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            Err(AppError::network_timeout("http://test")),
            Ok(vec![]),
            Ok(TestDataBuilder::league(2)),
        ]));
        let logger = Arc::new(RecordingLogger::default());
        let sleeper = Arc::new(RecordingSleeper::default());

        let result = fetcher_with(&provider, &logger, &sleeper)
            .fetch(&policy(3))
            .await;

        assert!(!result.is_available());
        assert_eq!(provider.calls(), 2);
        assert_eq!(logger.count(Severity::Error), 1);
        assert_eq!(logger.count(Severity::Warning), 1);
        assert_eq!(logger.count(Severity::Critical), 0);
        assert_eq!(sleeper.sleeps().len(), 1);
    }

    #[tokio::test]
    async fn test_recovers_after_faults() {
        let provider = Arc::new(ScriptedProvider::new(vec![
            Err(AppError::network_connection("http://test", "refused")),
            Err(AppError::missing_column("PTS")),
            Ok(TestDataBuilder::league(30)),
        ]));
        let logger = Arc::new(RecordingLogger::default());
        let sleeper = Arc::new(RecordingSleeper::default());

        let result = fetcher_with(&provider, &logger, &sleeper)
            .fetch(&policy(3))
            .await;

        assert_eq!(result.records().map(<[_]>::len), Some(30));
        assert_eq!(logger.count(Severity::Error), 2);
        assert_eq!(logger.count(Severity::Info), 1);
        assert_eq!(logger.count(Severity::Critical), 0);
        assert_eq!(sleeper.sleeps().len(), 2);
    }

    #[tokio::test]
    async fn test_fault_log_names_fault_kind() {
        let provider = Arc::new(ScriptedProvider::new(vec![Err(
            AppError::api_malformed_json("Response is not valid JSON", "http://test"),
        )]));
        let logger = Arc::new(RecordingLogger::default());
        let sleeper = Arc::new(RecordingSleeper::default());

        fetcher_with(&provider, &logger, &sleeper)
            .fetch(&policy(1))
            .await;

        let errors = logger.messages(Severity::Error);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("parse fault"), "got {}", errors[0]);
        assert!(errors[0].contains("attempt 1/1"));
    }

    #[test]
    fn test_attempt_outcome_from_result() {
        assert!(matches!(
            AttemptOutcome::from(Ok(vec![])),
            AttemptOutcome::Empty
        ));
        assert!(matches!(
            AttemptOutcome::from(Ok(TestDataBuilder::league(1))),
            AttemptOutcome::Records(ref r) if r.len() == 1
        ));
        assert!(matches!(
            AttemptOutcome::from(Err(AppError::api_not_found("http://test"))),
            AttemptOutcome::Fault(_)
        ));
    }
}

use crate::data_fetcher::fetch_log::{FetchLogger, Severity};
use crate::data_fetcher::fetcher::StatsProvider;
use crate::data_fetcher::models::TeamStatRecord;
use crate::data_fetcher::retry::Sleeper;
use crate::error::AppError;
use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

const TEAM_NAMES: [&str; 30] = [
    "Atlanta Hawks",
    "Boston Celtics",
    "Brooklyn Nets",
    "Charlotte Hornets",
    "Chicago Bulls",
    "Cleveland Cavaliers",
    "Dallas Mavericks",
    "Denver Nuggets",
    "Detroit Pistons",
    "Golden State Warriors",
    "Houston Rockets",
    "Indiana Pacers",
    "LA Clippers",
    "Los Angeles Lakers",
    "Memphis Grizzlies",
    "Miami Heat",
    "Milwaukee Bucks",
    "Minnesota Timberwolves",
    "New Orleans Pelicans",
    "New York Knicks",
    "Oklahoma City Thunder",
    "Orlando Magic",
    "Philadelphia 76ers",
    "Phoenix Suns",
    "Portland Trail Blazers",
    "Sacramento Kings",
    "San Antonio Spurs",
    "Toronto Raptors",
    "Utah Jazz",
    "Washington Wizards",
];

impl TestDataBuilder {
    /// Creates a record with a consistent win percentage and season points
    pub fn team_record(team_name: &str, wins: u32, losses: u32) -> TeamStatRecord {
        let games = wins + losses;
        let win_pct = if games == 0 {
            0.0
        } else {
            (f64::from(wins) / f64::from(games) * 1000.0).round() / 1000.0
        };
        TeamStatRecord {
            team_name: team_name.to_string(),
            wins,
            losses,
            win_pct,
            points: f64::from(games) * 112.5,
        }
    }

    /// Creates `count` records, cycling through the league's team names
    pub fn league(count: usize) -> Vec<TeamStatRecord> {
        (0..count)
            .map(|i| {
                let name = TEAM_NAMES[i % TEAM_NAMES.len()];
                let wins = 20 + (i as u32 * 7) % 45;
                Self::team_record(name, wins, 82 - wins)
            })
            .collect()
    }

    /// Stats API body carrying the given records, with the extra columns the real API sends
    pub fn league_dash_json(records: &[TeamStatRecord]) -> Value {
        let rows: Vec<Value> = records
            .iter()
            .enumerate()
            .map(|(i, r)| {
                json!([
                    1610612737 + i as u64,
                    r.team_name,
                    r.wins + r.losses,
                    r.wins,
                    r.losses,
                    r.win_pct,
                    3961.0,
                    r.points
                ])
            })
            .collect();

        json!({
            "resource": "leaguedashteamstats",
            "parameters": {"MeasureType": "Base", "PerMode": "Totals"},
            "resultSets": [{
                "name": "LeagueDashTeamStats",
                "headers": ["TEAM_ID", "TEAM_NAME", "GP", "W", "L", "W_PCT", "MIN", "PTS"],
                "rowSet": rows
            }]
        })
    }

    /// TheSportsDB body listing the given team names
    pub fn sportsdb_teams_json(names: &[&str]) -> Value {
        let teams: Vec<Value> = names
            .iter()
            .map(|name| {
                json!({
                    "idTeam": "134860",
                    "strTeam": name,
                    "strTeamShort": null,
                    "strStadium": "Arena",
                    "strLocation": "Somewhere, USA",
                    "intFormedYear": "1946",
                    "strBadge": "https://example.com/badge.png"
                })
            })
            .collect();
        json!({ "teams": teams })
    }
}

/// Log sink that keeps every entry in memory.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<(Severity, String)>>,
}

impl RecordingLogger {
    pub fn entries(&self) -> Vec<(Severity, String)> {
        lock(&self.entries).clone()
    }

    pub fn count(&self, severity: Severity) -> usize {
        lock(&self.entries)
            .iter()
            .filter(|(s, _)| *s == severity)
            .count()
    }

    pub fn messages(&self, severity: Severity) -> Vec<String> {
        lock(&self.entries)
            .iter()
            .filter(|(s, _)| *s == severity)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl FetchLogger for RecordingLogger {
    fn log(&self, severity: Severity, message: &str) {
        lock(&self.entries).push((severity, message.to_string()));
    }
}

/// Sleeper that records requested durations and returns immediately.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    sleeps: Mutex<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn sleeps(&self) -> Vec<Duration> {
        lock(&self.sleeps).clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) -> BoxFuture<'_, ()> {
        lock(&self.sleeps).push(duration);
        futures::future::ready(()).boxed()
    }
}

/// Provider that replays a fixed script of attempt results.
///
/// Once the script runs out every further attempt is a fault.
#[derive(Debug, Default)]
pub struct ScriptedProvider {
    script: Mutex<VecDeque<Result<Vec<TeamStatRecord>, AppError>>>,
    calls: AtomicUsize,
}

impl ScriptedProvider {
    pub fn new(script: Vec<Result<Vec<TeamStatRecord>, AppError>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl StatsProvider for ScriptedProvider {
    fn fetch_team_stats(&self) -> BoxFuture<'_, Result<Vec<TeamStatRecord>, AppError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = lock(&self.script).pop_front().unwrap_or_else(|| {
            Err(AppError::api_no_data(
                "scripted provider has no more responses",
                "scripted://",
            ))
        });
        futures::future::ready(next).boxed()
    }
}

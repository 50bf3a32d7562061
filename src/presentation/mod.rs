//! Shapes fetched records for display and renders the HTML pages.

pub mod html;

use crate::data_fetcher::models::TeamStatRecord;
use serde::Serialize;

pub use html::{escape_html, render_stats_page, render_teams_page};

/// The fields the stats table shows for one team.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamRow {
    pub team_name: String,
    pub wins: u32,
    pub losses: u32,
    pub win_pct: f64,
    pub points: f64,
}

impl From<&TeamStatRecord> for TeamRow {
    fn from(record: &TeamStatRecord) -> Self {
        TeamRow {
            team_name: record.team_name.clone(),
            wins: record.wins,
            losses: record.losses,
            win_pct: record.win_pct,
            points: record.points,
        }
    }
}

/// Maps records to table rows one-to-one, keeping their order.
pub fn project(records: &[TeamStatRecord]) -> Vec<TeamRow> {
    records.iter().map(TeamRow::from).collect()
}

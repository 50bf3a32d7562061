use crate::constants::columns;
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One team's line for a season.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStatRecord {
    pub team_name: String,
    pub wins: u32,
    pub losses: u32,
    /// Fraction in [0, 1]
    pub win_pct: f64,
    /// Season total or per-game average depending on the requested per-mode
    pub points: f64,
}

/// Response envelope of the stats API: a list of named tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeagueDashResponse {
    #[serde(default)]
    pub resource: String,
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<Value>>,
}

impl LeagueDashResponse {
    /// Converts the first result set into records.
    ///
    /// Fails on a missing result set, a missing required column or any row
    /// that cannot be converted; a partially valid table is never returned.
    pub fn into_team_stats(self, url: &str) -> Result<Vec<TeamStatRecord>, AppError> {
        let table = self
            .result_sets
            .into_iter()
            .next()
            .ok_or_else(|| AppError::api_unexpected_structure("resultSets is empty", url))?;
        table.team_stats()
    }
}

/// Positions of the required columns within a row.
struct ColumnIndex {
    team_name: usize,
    wins: usize,
    losses: usize,
    win_pct: usize,
    points: usize,
}

impl ColumnIndex {
    fn locate(headers: &[String]) -> Result<Self, AppError> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or_else(|| AppError::missing_column(column))
        };

        Ok(Self {
            team_name: find(columns::TEAM_NAME)?,
            wins: find(columns::WINS)?,
            losses: find(columns::LOSSES)?,
            win_pct: find(columns::WIN_PCT)?,
            points: find(columns::POINTS)?,
        })
    }
}

impl ResultSet {
    pub fn team_stats(&self) -> Result<Vec<TeamStatRecord>, AppError> {
        let index = ColumnIndex::locate(&self.headers)?;

        self.row_set
            .iter()
            .enumerate()
            .map(|(row_number, row)| -> Result<TeamStatRecord, AppError> {
                let cell = |position: usize, column: &str| {
                    row.get(position).ok_or_else(|| {
                        AppError::invalid_row(row_number, column, "row is shorter than headers")
                    })
                };

                Ok(TeamStatRecord {
                    team_name: text(cell(index.team_name, columns::TEAM_NAME)?, row_number)?,
                    wins: count(cell(index.wins, columns::WINS)?, row_number, columns::WINS)?,
                    losses: count(cell(index.losses, columns::LOSSES)?, row_number, columns::LOSSES)?,
                    win_pct: fraction(cell(index.win_pct, columns::WIN_PCT)?, row_number)?,
                    points: non_negative(cell(index.points, columns::POINTS)?, row_number)?,
                })
            })
            .collect()
    }
}

fn text(value: &Value, row: usize) -> Result<String, AppError> {
    match value.as_str() {
        Some(name) if !name.trim().is_empty() => Ok(name.to_string()),
        _ => Err(AppError::invalid_row(
            row,
            columns::TEAM_NAME,
            format!("expected a team name, got {value}"),
        )),
    }
}

fn count(value: &Value, row: usize, column: &str) -> Result<u32, AppError> {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| {
            AppError::invalid_row(row, column, format!("expected a non-negative integer, got {value}"))
        })
}

fn fraction(value: &Value, row: usize) -> Result<f64, AppError> {
    match value.as_f64() {
        Some(pct) if (0.0..=1.0).contains(&pct) => Ok(pct),
        _ => Err(AppError::invalid_row(
            row,
            columns::WIN_PCT,
            format!("expected a fraction between 0 and 1, got {value}"),
        )),
    }
}

fn non_negative(value: &Value, row: usize) -> Result<f64, AppError> {
    match value.as_f64() {
        Some(points) if points >= 0.0 => Ok(points),
        _ => Err(AppError::invalid_row(
            row,
            columns::POINTS,
            format!("expected a non-negative number, got {value}"),
        )),
    }
}

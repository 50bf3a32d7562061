//! Season label derivation

use crate::constants::provider::SEASON_START_MONTH;
use chrono::{Datelike, NaiveDate};

/// Returns the season in progress on `today`, e.g. `2024-25` for any date
/// from October 2024 through September 2025.
pub fn current_season(today: NaiveDate) -> String {
    let start_year = if today.month() >= SEASON_START_MONTH {
        today.year()
    } else {
        today.year() - 1
    };
    season_label(start_year)
}

/// Formats the label for a season starting in `start_year`.
pub fn season_label(start_year: i32) -> String {
    format!("{start_year}-{:02}", (start_year + 1).rem_euclid(100))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_season_during_regular_season() {
        assert_eq!(current_season(date(2025, 1, 15)), "2024-25");
        assert_eq!(current_season(date(2024, 11, 2)), "2024-25");
    }

    #[test]
    fn test_season_boundary() {
        assert_eq!(current_season(date(2024, 9, 30)), "2023-24");
        assert_eq!(current_season(date(2024, 10, 1)), "2024-25");
    }

    #[test]
    fn test_offseason_belongs_to_previous_season() {
        assert_eq!(current_season(date(2025, 7, 4)), "2024-25");
    }

    #[test]
    fn test_century_rollover() {
        assert_eq!(season_label(1999), "1999-00");
        assert_eq!(season_label(2009), "2009-10");
    }
}

pub mod team_stats;
pub mod teams;

pub use team_stats::{LeagueDashResponse, ResultSet, TeamStatRecord};
pub use teams::{SportsDbTeam, SportsDbTeamsResponse, TeamProfile};

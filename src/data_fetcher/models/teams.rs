use serde::{Deserialize, Serialize};

/// Response of TheSportsDB `search_all_teams.php`. `teams` is `null` for unknown leagues.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SportsDbTeamsResponse {
    #[serde(default)]
    pub teams: Option<Vec<SportsDbTeam>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SportsDbTeam {
    #[serde(rename = "strTeam")]
    pub team: String,
    #[serde(rename = "strTeamShort", default)]
    pub team_short: Option<String>,
    #[serde(rename = "strStadium", default)]
    pub stadium: Option<String>,
    #[serde(rename = "strLocation", default)]
    pub location: Option<String>,
    #[serde(rename = "intFormedYear", default)]
    pub formed_year: Option<String>,
    #[serde(rename = "strBadge", default)]
    pub badge: Option<String>,
    // Older API revisions only carry this field
    #[serde(rename = "strTeamBadge", default)]
    pub team_badge: Option<String>,
}

/// Display-ready team directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamProfile {
    pub name: String,
    pub short_name: Option<String>,
    pub stadium: Option<String>,
    pub location: Option<String>,
    pub formed_year: Option<String>,
    pub badge_url: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl From<SportsDbTeam> for TeamProfile {
    fn from(team: SportsDbTeam) -> Self {
        TeamProfile {
            name: team.team,
            short_name: non_blank(team.team_short),
            stadium: non_blank(team.stadium),
            location: non_blank(team.location),
            formed_year: non_blank(team.formed_year),
            badge_url: non_blank(team.badge).or_else(|| non_blank(team.team_badge)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_teams_deserializes() {
        let response: SportsDbTeamsResponse = serde_json::from_str(r#"{"teams": null}"#).unwrap();
        assert!(response.teams.is_none());
    }

    #[test]
    fn test_team_profile_prefers_new_badge_field() {
        let json = r#"{
            "strTeam": "Denver Nuggets",
            "strTeamShort": "DEN",
            "strStadium": "Ball Arena",
            "strLocation": "",
            "intFormedYear": "1967",
            "strBadge": "https://example.com/new.png",
            "strTeamBadge": "https://example.com/old.png"
        }"#;
        let team: SportsDbTeam = serde_json::from_str(json).unwrap();
        let profile = TeamProfile::from(team);

        assert_eq!(profile.name, "Denver Nuggets");
        assert_eq!(profile.short_name.as_deref(), Some("DEN"));
        assert_eq!(profile.location, None);
        assert_eq!(profile.formed_year.as_deref(), Some("1967"));
        assert_eq!(profile.badge_url.as_deref(), Some("https://example.com/new.png"));
    }

    #[test]
    fn test_team_profile_falls_back_to_old_badge_field() {
        let team = SportsDbTeam {
            team: "Utah Jazz".to_string(),
            team_badge: Some("https://example.com/old.png".to_string()),
            ..SportsDbTeam::default()
        };
        let profile = TeamProfile::from(team);
        assert_eq!(profile.badge_url.as_deref(), Some("https://example.com/old.png"));
    }
}

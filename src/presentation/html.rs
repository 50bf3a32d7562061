use super::TeamRow;
use crate::data_fetcher::models::TeamProfile;
use std::fmt::Write;

const STYLE: &str = "body{font-family:sans-serif;margin:2rem;}\
table{border-collapse:collapse;}\
th,td{border:1px solid #ccc;padding:0.3rem 0.7rem;text-align:right;}\
th:first-child,td:first-child{text-align:left;}\
thead{background:#1d428a;color:#fff;}";

/// Escapes the five characters that matter inside HTML text and attribute values.
pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape_html(title),
    )
}

/// Renders the team stats table.
///
/// Win percentage is shown with three decimals, points with one.
pub fn render_stats_page(rows: &[TeamRow], season: &str) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>NBA Team Stats {}</h1>", escape_html(season));
    body.push_str("<table>\n<thead>\n<tr><th>Team</th><th>W</th><th>L</th><th>Win %</th><th>PTS</th></tr>\n</thead>\n<tbody>\n");
    for row in rows {
        let _ = writeln!(
            body,
            "<tr class=\"team-row\"><td>{}</td><td>{}</td><td>{}</td><td>{:.3}</td><td>{:.1}</td></tr>",
            escape_html(&row.team_name),
            row.wins,
            row.losses,
            row.win_pct,
            row.points
        );
    }
    body.push_str("</tbody>\n</table>\n");

    document(&format!("NBA Team Stats {season}"), &body)
}

/// Renders the team directory as a list.
pub fn render_teams_page(teams: &[TeamProfile]) -> String {
    let mut body = String::from("<h1>NBA Teams</h1>\n<ul class=\"teams\">\n");
    for team in teams {
        body.push_str("<li class=\"team\">");
        if let Some(badge) = &team.badge_url {
            let _ = write!(
                body,
                "<img src=\"{}\" alt=\"\" width=\"32\" height=\"32\"> ",
                escape_html(badge)
            );
        }
        let _ = write!(body, "<strong>{}</strong>", escape_html(&team.name));
        if let Some(short) = &team.short_name {
            let _ = write!(body, " ({})", escape_html(short));
        }

        let formed = team.formed_year.as_deref().map(|y| format!("est. {y}"));
        let details: Vec<String> = [
            team.stadium.as_deref(),
            team.location.as_deref(),
            formed.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(escape_html)
        .collect();
        if !details.is_empty() {
            let _ = write!(body, " - {}", details.join(", "));
        }
        body.push_str("</li>\n");
    }
    body.push_str("</ul>\n");

    document("NBA Teams", &body)
}

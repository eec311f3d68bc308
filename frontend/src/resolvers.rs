//! Lookups and formatting derived from the current snapshot.
//!
//! Everything here is a pure function of its arguments: no state, no I/O,
//! and no input makes them fail.

use chrono::{DateTime, TimeZone};
use shared::{PlayerDto, TeamDto};
use std::fmt::Display;

/// Team label for a player with no (resolvable) team
pub const UNASSIGNED: &str = "Unassigned";
/// Team label for a game side that does not resolve
pub const UNKNOWN_TEAM: &str = "Unknown Team";

/// Name of the team with `team_id`, or `fallback` when there is no id, no
/// such team, or no teams loaded yet
pub fn team_name(teams: &[TeamDto], team_id: Option<&str>, fallback: &str) -> String {
    team_id
        .and_then(|id| teams.iter().find(|team| team.id == id))
        .map(|team| team.name.clone())
        .unwrap_or_else(|| fallback.to_string())
}

/// Players assigned to `team_id`, in snapshot order
pub fn roster_for<'a>(players: &'a [PlayerDto], team_id: &str) -> Vec<&'a PlayerDto> {
    players
        .iter()
        .filter(|player| player.team_id.as_deref() == Some(team_id))
        .collect()
}

/// `Sat, Mar 15, 2025, 10:00 AM`
pub fn format_game_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%a, %b %-d, %Y, %I:%M %p").to_string()
}

/// `March 15, 2025`
pub fn format_news_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format("%B %-d, %Y").to_string()
}

/// Avatar letter
pub fn initial(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::{player, team};
    use chrono::{FixedOffset, Utc};
    use pretty_assertions::assert_eq;

    fn teams() -> Vec<TeamDto> {
        vec![team("A", "Blue Hawks"), team("B", "Red Foxes")]
    }

    #[test]
    fn test_team_name_resolves() {
        assert_eq!(team_name(&teams(), Some("B"), UNASSIGNED), "Red Foxes");
    }

    #[test]
    fn test_team_name_dangling_and_missing_ids() {
        assert_eq!(team_name(&teams(), Some("Z"), UNKNOWN_TEAM), "Unknown Team");
        assert_eq!(team_name(&teams(), None, UNASSIGNED), "Unassigned");
    }

    #[test]
    fn test_team_name_empty_teams_matches_missing_id() {
        assert_eq!(team_name(&[], Some("A"), UNASSIGNED), team_name(&teams(), Some("nope"), UNASSIGNED));
        assert_eq!(team_name(&[], None, UNKNOWN_TEAM), "Unknown Team");
    }

    #[test]
    fn test_team_name_is_idempotent() {
        let teams = teams();
        let first = team_name(&teams, Some("A"), UNASSIGNED);
        let second = team_name(&teams, Some("A"), UNASSIGNED);
        assert_eq!(first, second);
    }

    #[test]
    fn test_roster_filter() {
        let players = vec![
            player("1", "Alex", Some("A")),
            player("2", "Blake", Some("B")),
            player("3", "Casey", None),
        ];

        let roster = roster_for(&players, "A");
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].id, "1");

        assert!(roster_for(&players, "C").is_empty());
    }

    #[test]
    fn test_roster_keeps_snapshot_order() {
        let players = vec![
            player("9", "Zed", Some("A")),
            player("2", "Blake", Some("B")),
            player("1", "Alex", Some("A")),
        ];

        let ids: Vec<&str> = roster_for(&players, "A").iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["9", "1"]);
        assert_eq!(roster_for(&players, "A"), roster_for(&players, "A"));
    }

    #[test]
    fn test_roster_of_empty_players() {
        assert!(roster_for(&[], "A").is_empty());
    }

    #[test]
    fn test_format_game_date() {
        let date = Utc.with_ymd_and_hms(2025, 3, 15, 10, 0, 0).unwrap();
        assert_eq!(format_game_date(&date), "Sat, Mar 15, 2025, 10:00 AM");

        let evening = Utc.with_ymd_and_hms(2025, 3, 5, 18, 5, 0).unwrap();
        assert_eq!(format_game_date(&evening), "Wed, Mar 5, 2025, 06:05 PM");
    }

    #[test]
    fn test_format_game_date_uses_given_zone() {
        let date = Utc.with_ymd_and_hms(2025, 3, 15, 10, 0, 0).unwrap();
        let chicago = FixedOffset::west_opt(6 * 3600).unwrap();
        assert_eq!(format_game_date(&date.with_timezone(&chicago)), "Sat, Mar 15, 2025, 04:00 AM");
    }

    #[test]
    fn test_format_news_date() {
        let date = Utc.with_ymd_and_hms(2025, 3, 1, 9, 30, 0).unwrap();
        assert_eq!(format_news_date(&date), "March 1, 2025");
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial("Alex Kim"), "A");
        assert_eq!(initial("Émile"), "É");
        assert_eq!(initial(""), "");
    }
}

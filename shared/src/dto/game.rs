use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::models::game_status::GameStatus;

/// Data Transfer Object for a scheduled or played game
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameDto {
    pub id: String,
    pub home_team_id: String,
    pub away_team_id: String,
    #[serde(with = "crate::timestamp")]
    pub date: DateTime<Utc>,
    pub location: String,
    #[serde(default)]
    pub status: GameStatus,
    #[serde(default)]
    pub home_score: Option<i32>,
    #[serde(default)]
    pub away_score: Option<i32>,
}

impl GameDto {
    /// Score line to display, `(home, away)`.
    ///
    /// Only completed games with at least one reported side have one; a
    /// missing side counts as zero.
    pub fn final_score(&self) -> Option<(i32, i32)> {
        if self.status != GameStatus::Completed {
            return None;
        }
        if self.home_score.is_none() && self.away_score.is_none() {
            return None;
        }
        Some((self.home_score.unwrap_or(0), self.away_score.unwrap_or(0)))
    }
}

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::models::age_group::AgeGroup;

/// Data Transfer Object for a club team
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TeamDto {
    pub id: String,
    pub name: String,
    pub age_group: AgeGroup,
    #[serde(default)]
    pub coach_name: Option<String>,
    #[serde(default)]
    pub coach_email: Option<String>,
    /// Maintained by the API; the roster shown is derived from players instead
    #[serde(default)]
    pub player_count: u32,
    #[serde(default, with = "crate::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

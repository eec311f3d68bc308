use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};

/// Data Transfer Object for a club news item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsDto {
    pub id: String,
    pub title: String,
    /// Free text; line breaks are significant
    pub content: String,
    pub author: String,
    #[serde(with = "crate::timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub important: bool,
}

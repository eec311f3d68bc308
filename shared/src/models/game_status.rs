use serde::{Deserialize, Serialize};

/// Lifecycle of a scheduled game as reported by the API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    #[serde(other)]
    Other,
}

impl GameStatus {
    pub fn label(&self) -> &'static str {
        match self {
            GameStatus::Scheduled => "Scheduled",
            GameStatus::Completed => "Completed",
            GameStatus::Cancelled => "Cancelled",
            GameStatus::Other => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_known_statuses_decode() {
        let status: GameStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(status, GameStatus::Completed);
        let status: GameStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(status, GameStatus::Cancelled);
    }

    #[test]
    fn test_unknown_status_decodes_to_other() {
        let status: GameStatus = serde_json::from_str("\"postponed\"").unwrap();
        assert_eq!(status, GameStatus::Other);
        assert_eq!(status.label(), "Other");
    }
}

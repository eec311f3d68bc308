use serde::{Deserialize, Serialize};

/// Dashboard counters computed by the API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct StatsDto {
    #[serde(default)]
    pub total_players: u32,
    #[serde(default)]
    pub total_teams: u32,
    #[serde(default)]
    pub upcoming_games: u32,
    #[serde(default)]
    pub recent_news: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_stats_decode() {
        let stats: StatsDto = serde_json::from_value(json!({
            "total_players": 42,
            "total_teams": 4,
            "upcoming_games": 3,
            "recent_news": 7
        }))
        .unwrap();
        assert_eq!(stats.total_players, 42);
        assert_eq!(stats.recent_news, 7);
    }

    #[test]
    fn test_stats_default_is_zeroed() {
        let stats: StatsDto = serde_json::from_value(json!({})).unwrap();
        assert_eq!(stats, StatsDto::default());
    }
}

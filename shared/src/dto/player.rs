use serde::{Deserialize, Serialize};
use validator::Validate;
use chrono::{DateTime, Utc};
use crate::models::age_group::AgeGroup;

/// Data Transfer Object for a registered player
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PlayerDto {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub age_group: AgeGroup,
    pub parent_name: String,
    pub parent_email: String,
    pub parent_phone: String,
    /// Team the API assigned the player to, if any. May not resolve.
    #[serde(default)]
    pub team_id: Option<String>,
    #[serde(default, with = "crate::timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Request for player registration.
///
/// The validation rules are the constraints the registration form declares
/// on its inputs; anything stricter is the API's call.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct CreatePlayerRequest {
    #[validate(length(min = 1, message = "Player name is required"))]
    pub name: String,

    #[validate(range(min = 4, max = 16, message = "Age must be between 4 and 16"))]
    pub age: i32,

    #[validate(length(min = 1, message = "Parent name is required"))]
    pub parent_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub parent_email: String,

    #[validate(length(min = 1, message = "Parent phone is required"))]
    pub parent_phone: String,
}

impl CreatePlayerRequest {
    /// Whether a player returned by the API was created from this request
    pub fn matches(&self, player: &PlayerDto) -> bool {
        player.name == self.name
            && player.age == self.age
            && player.parent_name == self.parent_name
            && player.parent_email == self.parent_email
            && player.parent_phone == self.parent_phone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn valid_request() -> CreatePlayerRequest {
        CreatePlayerRequest {
            name: "Alex Kim".to_string(),
            age: 9,
            parent_name: "Jo Kim".to_string(),
            parent_email: "jo@example.com".to_string(),
            parent_phone: "555-0100".to_string(),
        }
    }

    #[test]
    fn test_create_request_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[rstest]
    #[case(3)]
    #[case(17)]
    #[case(-1)]
    fn test_create_request_age_out_of_range(#[case] age: i32) {
        let request = CreatePlayerRequest { age, ..valid_request() };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_bad_email() {
        let request = CreatePlayerRequest {
            parent_email: "jo-at-example".to_string(),
            ..valid_request()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_request_wire_shape() {
        let value = serde_json::to_value(valid_request()).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Alex Kim",
                "age": 9,
                "parent_name": "Jo Kim",
                "parent_email": "jo@example.com",
                "parent_phone": "555-0100"
            })
        );
    }

    #[test]
    fn test_player_decodes_api_payload() {
        let player: PlayerDto = serde_json::from_value(json!({
            "id": "7d3f",
            "name": "Alex Kim",
            "age": 9,
            "age_group": "U10",
            "parent_name": "Jo Kim",
            "parent_email": "jo@example.com",
            "parent_phone": "555-0100",
            "team_id": null,
            "created_at": "2025-03-15T10:00:00.123456"
        }))
        .unwrap();

        assert_eq!(player.age_group, AgeGroup::U10);
        assert_eq!(player.team_id, None);
        assert!(player.created_at.is_some());
        assert!(valid_request().matches(&player));
    }

    #[test]
    fn test_player_without_optional_fields() {
        let player: PlayerDto = serde_json::from_value(json!({
            "id": "1",
            "name": "Sam",
            "age": 6,
            "age_group": "U6",
            "parent_name": "Pat",
            "parent_email": "pat@example.com",
            "parent_phone": "555-0101"
        }))
        .unwrap();
        assert_eq!(player.team_id, None);
        assert_eq!(player.created_at, None);
    }
}

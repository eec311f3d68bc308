use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Conversion error: {0}")]
    Conversion(String),

    #[error("Required field missing: {0}")]
    MissingField(String),
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::player::CreatePlayerRequest;
    use validator::Validate;

    #[test]
    fn test_validation_errors_convert() {
        let request = CreatePlayerRequest {
            name: String::new(),
            age: 9,
            parent_name: "Jo Kim".to_string(),
            parent_email: "jo@example.com".to_string(),
            parent_phone: "555-0100".to_string(),
        };
        let err: SharedError = request.validate().unwrap_err().into();
        match err {
            SharedError::Validation(msg) => assert!(msg.contains("name")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_json_error_converts_to_conversion() {
        let err: SharedError = serde_json::from_str::<u32>("not a number").unwrap_err().into();
        assert!(matches!(err, SharedError::Conversion(_)));
        assert!(err.to_string().starts_with("Conversion error"));
    }
}

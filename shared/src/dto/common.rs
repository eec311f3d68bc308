use serde::{Deserialize, Serialize};

/// Error body returned by the club API on failure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    /// Either a message or a list of field errors, depending on the failure
    pub detail: serde_json::Value,
}

impl ErrorResponse {
    /// Human-readable form of `detail`
    pub fn message(&self) -> String {
        match &self.detail {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }
}

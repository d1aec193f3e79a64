use serde::{Deserialize, Serialize};
use serde_json::Value;

/// User record returned by `GET /users/{id}`. Fields beyond `id` and `name`
/// are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn network(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "NETWORK_ERROR".to_string(),
            details: None,
        }
    }

    pub fn parse(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "PARSE_ERROR".to_string(),
            details: None,
        }
    }

    pub fn http_status(status: u16) -> Self {
        Self {
            error: format!("Request failed with status {}", status),
            code: format!("HTTP_{}", status),
            details: None,
        }
    }
}

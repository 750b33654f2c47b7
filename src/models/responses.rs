//! Response DTOs for the user API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use super::User;

/// Response body for POST /user/create
///
/// The record fields sit next to `sid` at the top level.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUserResponse {
    /// Newly minted identifier
    pub sid: String,
    /// The stored record
    #[serde(flatten)]
    pub user: User,
}

impl CreateUserResponse {
    /// Creates a new CreateUserResponse
    pub fn new(sid: impl Into<String>, user: User) -> Self {
        Self {
            sid: sid.into(),
            user,
        }
    }
}

/// Response body for GET /user/:id
#[derive(Debug, Clone, Serialize)]
pub struct GetUserResponse {
    /// The requested identifier
    pub sid: String,
    /// The stored record
    pub data: User,
}

impl GetUserResponse {
    /// Creates a new GetUserResponse
    pub fn new(sid: impl Into<String>, data: User) -> Self {
        Self {
            sid: sid.into(),
            data,
        }
    }
}

/// Body carrying a single human readable message.
///
/// Used by the ping and delete endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Reply to GET /ping
    pub fn pong() -> Self {
        Self::new("pong")
    }

    /// Reply to DELETE /user/:id
    pub fn user_removed() -> Self {
        Self::new("User removed successfully")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn ann() -> User {
        User {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            profile_url: "http://x.com/ann".to_string(),
        }
    }

    #[test]
    fn test_create_response_is_flat() {
        let resp = CreateUserResponse::new("abc", ann());
        let value: Value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            json!({
                "sid": "abc",
                "name": "Ann",
                "email": "ann@x.com",
                "profileUrl": "http://x.com/ann"
            })
        );
    }

    #[test]
    fn test_get_response_nests_data() {
        let resp = GetUserResponse::new("abc", ann());
        let value: Value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["sid"], "abc");
        assert_eq!(value["data"]["profileUrl"], "http://x.com/ann");
    }

    #[test]
    fn test_message_responses() {
        let json = serde_json::to_string(&MessageResponse::pong()).unwrap();
        assert_eq!(json, r#"{"message":"pong"}"#);

        let json = serde_json::to_string(&MessageResponse::user_removed()).unwrap();
        assert_eq!(json, r#"{"message":"User removed successfully"}"#);
    }
}

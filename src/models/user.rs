//! User record
//!
//! The shape accepted in request bodies and stored as the value of each entry.

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A user record.
///
/// Fields missing from a request body, or sent as `null`, default to the
/// empty string; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    /// Display name
    #[serde(deserialize_with = "null_as_empty")]
    pub name: String,
    /// Contact email, not validated
    #[serde(deserialize_with = "null_as_empty")]
    pub email: String,
    /// Link to the user's profile
    #[serde(deserialize_with = "null_as_empty")]
    pub profile_url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl User {
    /// Parses a JSON document that must be an object.
    ///
    /// Arrays would otherwise bind to the fields by position.
    pub fn from_json(bytes: &[u8]) -> serde_json::Result<Self> {
        match serde_json::from_slice::<Value>(bytes)? {
            object @ Value::Object(_) => serde_json::from_value(object),
            other => Err(serde_json::Error::custom(format!(
                "expected a JSON object, found {}",
                kind_of(&other)
            ))),
        }
    }

    /// Serializes the record into the string stored under its id.
    pub fn to_stored(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parses a value read back from the store.
    pub fn from_stored(value: &str) -> serde_json::Result<Self> {
        Self::from_json(value.as_bytes())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ann() -> User {
        User {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            profile_url: "http://x.com/ann".to_string(),
        }
    }

    #[test]
    fn test_user_deserialize() {
        let json = br#"{"name":"Ann","email":"ann@x.com","profileUrl":"http://x.com/ann"}"#;
        let user = User::from_json(json).unwrap();
        assert_eq!(user, ann());
    }

    #[test]
    fn test_user_missing_fields_default_to_empty() {
        let user = User::from_json(br#"{"name":"Ann"}"#).unwrap();
        assert_eq!(user.name, "Ann");
        assert!(user.email.is_empty());
        assert!(user.profile_url.is_empty());
    }

    #[test]
    fn test_user_null_fields_default_to_empty() {
        let user = User::from_json(br#"{"name":null,"email":"ann@x.com"}"#).unwrap();
        assert!(user.name.is_empty());
        assert_eq!(user.email, "ann@x.com");
    }

    #[test]
    fn test_user_ignores_unknown_fields() {
        let user = User::from_json(br#"{"name":"Ann","age":40}"#).unwrap();
        assert_eq!(user.name, "Ann");
    }

    #[test]
    fn test_user_rejects_wrong_shape() {
        assert!(User::from_json(br#"["Ann"]"#).is_err());
        assert!(User::from_json(b"[]").is_err());
        assert!(User::from_json(br#""Ann""#).is_err());
        assert!(User::from_json(b"null").is_err());
        assert!(User::from_json(br#"{"name":42}"#).is_err());
        assert!(User::from_json(b"{not json").is_err());
    }

    #[test]
    fn test_wrong_shape_message() {
        let err = User::from_json(b"[]").unwrap_err();
        assert!(err.to_string().contains("expected a JSON object, found an array"));
    }

    #[test]
    fn test_stored_format() {
        assert_eq!(
            ann().to_stored().unwrap(),
            r#"{"name":"Ann","email":"ann@x.com","profileUrl":"http://x.com/ann"}"#
        );
    }

    #[test]
    fn test_from_stored_round_trip() {
        let stored = ann().to_stored().unwrap();
        assert_eq!(User::from_stored(&stored).unwrap(), ann());
    }

    #[test]
    fn test_from_stored_rejects_garbage() {
        assert!(User::from_stored("not json").is_err());
    }
}

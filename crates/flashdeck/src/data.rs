//! Request and response bodies exchanged with the flashcard API.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::FormError;

/// Values offered by the difficulty select, first one is the default.
pub const DIFFICULTY_CHOICES: [(&str, &str); 3] = [
    ("beginner", "Beginner"),
    ("intermediate", "Intermediate"),
    ("advanced", "Advanced"),
];

pub const DEFAULT_DIFFICULTY: &str = DIFFICULTY_CHOICES[0].0;

/// Opaque bearer credential issued by the token endpoint.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value for the `Authorization` header.
    pub fn header_value(&self) -> String {
        format!("Token {}", self.0)
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(***)")
    }
}

#[derive(Serialize, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct TokenResponse {
    pub auth_token: AuthToken,
}

/// Raw values as they come out of the create-set form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSetFields {
    pub name: String,
    pub description: String,
    pub category: String,
    pub difficulty: String,
    pub is_public: bool,
}

impl Default for RawSetFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category: String::new(),
            difficulty: DEFAULT_DIFFICULTY.to_string(),
            is_public: false,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SetCreateRequest {
    pub name: String,
    pub description: String,
    pub category: Option<String>,
    pub difficulty: String,
    pub is_public: bool,
}

impl SetCreateRequest {
    /// Applies the form defaults and rejects a blank name.
    pub fn from_fields(fields: RawSetFields) -> Result<Self, FormError> {
        if fields.name.trim().is_empty() {
            return Err(FormError::NameRequired);
        }

        let category = if fields.category.is_empty() {
            None
        } else {
            Some(fields.category)
        };

        Ok(Self {
            name: fields.name,
            description: fields.description,
            category,
            difficulty: fields.difficulty,
            is_public: fields.is_public,
        })
    }
}

/// The set as echoed back by the server after creation.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct CreatedSet {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<serde_json::Value>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub is_public: bool,
}

/// Failure body shared by both endpoints.
#[derive(Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Lenient parse: anything that is not the expected JSON yields an empty body.
    pub fn from_text(text: &str) -> Self {
        serde_json::from_str(text).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str) -> RawSetFields {
        RawSetFields {
            name: name.to_string(),
            ..RawSetFields::default()
        }
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(
            SetCreateRequest::from_fields(fields("   ")),
            Err(FormError::NameRequired)
        );
        assert_eq!(
            SetCreateRequest::from_fields(fields("")),
            Err(FormError::NameRequired)
        );
    }

    #[test]
    fn defaults_are_applied() {
        let request = SetCreateRequest::from_fields(fields("Capitals")).unwrap();
        assert_eq!(request.name, "Capitals");
        assert_eq!(request.description, "");
        assert_eq!(request.category, None);
        assert_eq!(request.difficulty, "beginner");
        assert!(!request.is_public);
    }

    #[test]
    fn request_serializes_null_category() {
        let request = SetCreateRequest::from_fields(fields("Capitals")).unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "Capitals",
                "description": "",
                "category": null,
                "difficulty": "beginner",
                "is_public": false,
            })
        );
    }

    #[test]
    fn filled_category_is_kept() {
        let raw = RawSetFields {
            name: "HSK 1".to_string(),
            description: "first words".to_string(),
            category: "Chinese".to_string(),
            difficulty: "advanced".to_string(),
            is_public: true,
        };
        let request = SetCreateRequest::from_fields(raw).unwrap();
        assert_eq!(request.category.as_deref(), Some("Chinese"));
        assert_eq!(request.description, "first words");
        assert_eq!(request.difficulty, "advanced");
        assert!(request.is_public);
    }

    #[test]
    fn secrets_are_redacted_in_debug() {
        let credentials = Credentials::new("alice", "hunter2");
        let token = AuthToken::new("T1");
        assert!(!format!("{credentials:?}").contains("hunter2"));
        assert!(!format!("{token:?}").contains("T1"));
        assert_eq!(token.header_value(), "Token T1");
    }

    #[test]
    fn error_body_tolerates_non_json() {
        assert_eq!(ErrorBody::from_text("<html>500</html>"), ErrorBody::default());
        let body = ErrorBody::from_text(r#"{"error": "duplicate name"}"#);
        assert_eq!(body.error.as_deref(), Some("duplicate name"));
        assert_eq!(body.detail, None);
    }

    #[test]
    fn created_set_only_needs_a_name() {
        let set: CreatedSet = serde_json::from_str(r#"{"name": "Capitals"}"#).unwrap();
        assert_eq!(set.name, "Capitals");
        assert_eq!(set.id, None);
    }
}

use serde::Deserialize;
use serde::Serialize;

use super::errors::TokenError;

/// Identity pair carried inside a bearer token.
///
/// A structured two-field record serialized as a JSON object inside the
/// ciphertext. Using named fields instead of a delimiter-joined string means
/// identifiers may contain any text without becoming ambiguous on decode.
///
/// Invariant: both fields are non-empty. The constructor is the only way to
/// build a payload, so a value of this type always satisfies the invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TokenPayload {
    user_id: String,
    username: String,
}

impl TokenPayload {
    /// Create a payload from an identity pair.
    ///
    /// # Arguments
    /// * `user_id` - Unique user identifier
    /// * `username` - Username as stored at issuance time
    ///
    /// # Errors
    /// * `EmptyField` - Either field is empty
    pub fn new(
        user_id: impl Into<String>,
        username: impl Into<String>,
    ) -> Result<Self, TokenError> {
        let user_id = user_id.into();
        let username = username.into();

        if user_id.is_empty() {
            return Err(TokenError::EmptyField("user_id"));
        }
        if username.is_empty() {
            return Err(TokenError::EmptyField("username"));
        }

        Ok(Self { user_id, username })
    }

    /// Get the user identifier.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Get the username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Consume self and return `(user_id, username)`.
    pub fn into_parts(self) -> (String, String) {
        (self.user_id, self.username)
    }

    /// Re-check the field invariant after deserialization.
    ///
    /// Serde enforces the record shape but not non-emptiness; decode calls
    /// this before trusting a deserialized payload.
    pub(crate) fn is_well_formed(&self) -> bool {
        !self.user_id.is_empty() && !self.username.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_payload() {
        let payload = TokenPayload::new("user123", "alice").unwrap();
        assert_eq!(payload.user_id(), "user123");
        assert_eq!(payload.username(), "alice");
    }

    #[test]
    fn test_empty_user_id_rejected() {
        let result = TokenPayload::new("", "alice");
        assert_eq!(result.unwrap_err(), TokenError::EmptyField("user_id"));
    }

    #[test]
    fn test_empty_username_rejected() {
        let result = TokenPayload::new("user123", "");
        assert_eq!(result.unwrap_err(), TokenError::EmptyField("username"));
    }

    #[test]
    fn test_into_parts() {
        let payload = TokenPayload::new("user123", "alice").unwrap();
        let (user_id, username) = payload.into_parts();
        assert_eq!(user_id, "user123");
        assert_eq!(username, "alice");
    }

    #[test]
    fn test_deny_unknown_fields() {
        let result: Result<TokenPayload, _> =
            serde_json::from_str(r#"{"user_id":"u1","username":"alice","role":"admin"}"#);
        assert!(result.is_err());
    }
}

use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::token::TokenCodec;
use crate::token::TokenError;
use crate::token::TokenPayload;

/// Authentication coordinator combining password verification and token issuance.
///
/// Provides high-level authentication operations by coordinating
/// password hashing and the bearer token codec.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    token_codec: TokenCodec,
}

/// Result of successful authentication.
pub struct AuthenticationResult {
    /// Opaque bearer access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Token error: {0}")]
    TokenError(#[from] TokenError),
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `token_secret` - Secret key for the token cipher
    pub fn new(token_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            token_codec: TokenCodec::new(token_secret),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a bearer token.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to verify
    /// * `stored_hash` - Stored password hash
    /// * `payload` - Identity pair to embed in the token
    ///
    /// # Returns
    /// AuthenticationResult with access token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password verification failed
    /// * `TokenError` - Token encoding failed
    pub fn authenticate(
        &self,
        password: &str,
        stored_hash: &str,
        payload: &TokenPayload,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        let is_valid = self.password_hasher.verify(password, stored_hash)?;

        if !is_valid {
            return Err(AuthenticationError::InvalidCredentials);
        }

        let access_token = self.token_codec.encode(payload)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token without password verification.
    ///
    /// Used when the caller has already established the identity by other
    /// means (e.g. immediately after registration).
    ///
    /// # Errors
    /// * `TokenError` - Token encoding failed
    pub fn issue_token(&self, payload: &TokenPayload) -> Result<String, TokenError> {
        self.token_codec.encode(payload)
    }

    /// Validate a bearer token and recover the identity it encodes.
    ///
    /// The caller remains responsible for checking the decoded identity
    /// against stored state (user still exists, username unchanged).
    ///
    /// # Errors
    /// * `TokenError::InvalidToken` - Token was not issued under this secret
    pub fn verify_token(&self, token: &str) -> Result<TokenPayload, TokenError> {
        self.token_codec.decode(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticate_success() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let password = "my_password";
        let hash = authenticator
            .hash_password(password)
            .expect("Failed to hash password");

        let payload = TokenPayload::new("user123", "alice").unwrap();
        let result = authenticator
            .authenticate(password, &hash, &payload)
            .expect("Authentication failed");

        assert!(!result.access_token.is_empty());

        let decoded = authenticator
            .verify_token(&result.access_token)
            .expect("Token validation failed");
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_authenticate_invalid_password() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let hash = authenticator
            .hash_password("my_password")
            .expect("Failed to hash password");

        let payload = TokenPayload::new("user123", "alice").unwrap();
        let result = authenticator.authenticate("wrong_password", &hash, &payload);
        assert!(matches!(
            result,
            Err(AuthenticationError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_issue_and_verify_token() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let payload = TokenPayload::new("user123", "alice").unwrap();
        let token = authenticator
            .issue_token(&payload)
            .expect("Failed to issue token");

        let decoded = authenticator
            .verify_token(&token)
            .expect("Failed to verify token");
        assert_eq!(decoded.user_id(), "user123");
        assert_eq!(decoded.username(), "alice");
    }

    #[test]
    fn test_verify_invalid_token() {
        let authenticator = Authenticator::new(b"test_secret_key_at_least_32_bytes!");

        let result = authenticator.verify_token("invalid-token-here");
        assert!(matches!(result, Err(TokenError::InvalidToken)));
    }

    #[test]
    fn test_tokens_from_different_secrets_rejected() {
        let issuer = Authenticator::new(b"secret1_at_least_32_bytes_long_key!");
        let verifier = Authenticator::new(b"secret2_at_least_32_bytes_long_key!");

        let payload = TokenPayload::new("user123", "alice").unwrap();
        let token = issuer.issue_token(&payload).unwrap();

        assert!(matches!(
            verifier.verify_token(&token),
            Err(TokenError::InvalidToken)
        ));
    }
}

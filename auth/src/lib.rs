//! Authentication utilities library
//!
//! Provides reusable authentication infrastructure for services:
//! - Password hashing (Argon2id)
//! - Opaque bearer token encoding and decoding (AES-256-GCM)
//! - Authentication coordination
//!
//! Each service defines its own authentication traits and adapts these implementations.
//! This avoids coupling services through shared domain logic while reducing code duplication.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! let is_valid = hasher.verify("my_password", &hash).unwrap();
//! assert!(is_valid);
//! ```
//!
//! ## Bearer Tokens
//! ```
//! use auth::{TokenCodec, TokenPayload};
//!
//! let codec = TokenCodec::new(b"secret_key_at_least_32_bytes_long!");
//! let payload = TokenPayload::new("user123", "alice").unwrap();
//! let token = codec.encode(&payload).unwrap();
//! let decoded = codec.decode(&token).unwrap();
//! assert_eq!(decoded, payload);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, TokenPayload};
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! let payload = TokenPayload::new("user123", "alice").unwrap();
//! let result = auth.authenticate("password123", &hash, &payload).unwrap();
//!
//! // Validate token on a later request
//! let identity = auth.verify_token(&result.access_token).unwrap();
//! assert_eq!(identity.user_id(), "user123");
//! ```

pub mod authenticator;
pub mod password;
pub mod token;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use token::TokenCodec;
pub use token::TokenError;
pub use token::TokenPayload;

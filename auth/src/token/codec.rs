use aes_gcm::aead::Aead;
use aes_gcm::aead::AeadCore;
use aes_gcm::aead::KeyInit;
use aes_gcm::aead::OsRng;
use aes_gcm::Aes256Gcm;
use aes_gcm::Key;
use aes_gcm::Nonce;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use sha2::Digest;
use sha2::Sha256;

use super::errors::TokenError;
use super::payload::TokenPayload;

/// Number of bytes of random nonce prefixed to the ciphertext.
const NONCE_LEN: usize = 12;

/// Opaque bearer token codec.
///
/// Encrypts a [`TokenPayload`] with AES-256-GCM under a secret injected at
/// construction time, and recovers the payload from a token string. The
/// secret is passed in explicitly (never read from the environment here) so
/// the codec can be exercised with fixed keys.
///
/// Wire format: `base64url_nopad(nonce || ciphertext)`, where the nonce is
/// 12 random bytes drawn per encode and the ciphertext is the AEAD output
/// over the JSON-serialized payload. The payload field names and this
/// framing must match exactly between encode and decode; changing either
/// makes previously issued tokens unparsable.
///
/// Tokens carry no expiry and are never persisted server-side. They stay
/// valid until the secret changes, which invalidates all of them at once.
#[derive(Clone)]
pub struct TokenCodec {
    cipher: Aes256Gcm,
}

impl TokenCodec {
    /// Create a codec from a secret of arbitrary length.
    ///
    /// The AES-256 key is the SHA-256 digest of the secret, so operators may
    /// configure any non-trivial string without worrying about exact length.
    ///
    /// # Arguments
    /// * `secret` - Process-wide token secret (from configuration)
    pub fn new(secret: &[u8]) -> Self {
        let key = Sha256::digest(secret);
        Self {
            cipher: Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key)),
        }
    }

    /// Encode an identity payload into an opaque token string.
    ///
    /// # Arguments
    /// * `payload` - Identity pair to embed
    ///
    /// # Returns
    /// Transport-safe token string
    ///
    /// # Errors
    /// * `EmptyField` - Payload carries an empty field
    /// * `EncodingFailed` - Serialization or encryption failed
    pub fn encode(&self, payload: &TokenPayload) -> Result<String, TokenError> {
        if payload.user_id().is_empty() {
            return Err(TokenError::EmptyField("user_id"));
        }
        if payload.username().is_empty() {
            return Err(TokenError::EmptyField("username"));
        }

        let plaintext = serde_json::to_vec(payload)
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext.as_ref())
            .map_err(|e| TokenError::EncodingFailed(e.to_string()))?;

        let mut raw = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        raw.extend_from_slice(&nonce);
        raw.extend_from_slice(&ciphertext);

        Ok(URL_SAFE_NO_PAD.encode(raw))
    }

    /// Decode a token string back into its identity payload.
    ///
    /// Total and synchronous: every failure (bad base64, truncated framing,
    /// wrong key, corrupted ciphertext, unexpected payload shape, empty
    /// field) returns the same `InvalidToken` value. Nothing about the
    /// failing stage is observable from outside.
    ///
    /// The caller still owns the integrity check against stored state:
    /// re-fetch the user by id and compare the stored username with the
    /// decoded one before trusting the identity.
    ///
    /// # Arguments
    /// * `token` - Opaque string taken from an `Authorization: Bearer` header
    ///
    /// # Returns
    /// The embedded identity payload
    ///
    /// # Errors
    /// * `InvalidToken` - Token was not produced by `encode` under this secret
    pub fn decode(&self, token: &str) -> Result<TokenPayload, TokenError> {
        let raw = URL_SAFE_NO_PAD
            .decode(token)
            .map_err(|_| TokenError::InvalidToken)?;

        if raw.len() <= NONCE_LEN {
            return Err(TokenError::InvalidToken);
        }
        let (nonce, ciphertext) = raw.split_at(NONCE_LEN);

        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| TokenError::InvalidToken)?;

        let payload: TokenPayload =
            serde_json::from_slice(&plaintext).map_err(|_| TokenError::InvalidToken)?;

        if !payload.is_well_formed() {
            return Err(TokenError::InvalidToken);
        }

        Ok(payload)
    }

    /// Encrypt arbitrary plaintext with this codec's key (test forgery aid).
    #[cfg(test)]
    fn encrypt_raw(&self, plaintext: &[u8]) -> String {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self.cipher.encrypt(&nonce, plaintext).unwrap();

        let mut raw = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        raw.extend_from_slice(&nonce);
        raw.extend_from_slice(&ciphertext);
        URL_SAFE_NO_PAD.encode(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> TokenCodec {
        TokenCodec::new(b"test_secret_key_at_least_32_bytes!")
    }

    #[test]
    fn test_encode_and_decode() {
        let codec = codec();
        let payload = TokenPayload::new("user123", "alice").unwrap();

        let token = codec.encode(&payload).expect("Failed to encode token");
        assert!(!token.is_empty());

        let decoded = codec.decode(&token).expect("Failed to decode token");
        assert_eq!(decoded, payload);
    }

    #[test]
    fn test_fields_with_arbitrary_text_round_trip() {
        // Identifiers containing delimiter-like sequences must survive intact.
        let codec = codec();
        let payload = TokenPayload::new("u&&%@1", "ali&&%@ce").unwrap();

        let token = codec.encode(&payload).unwrap();
        let decoded = codec.decode(&token).unwrap();
        assert_eq!(decoded.user_id(), "u&&%@1");
        assert_eq!(decoded.username(), "ali&&%@ce");
    }

    #[test]
    fn test_decode_garbage_is_invalid_not_a_panic() {
        let codec = codec();

        for token in ["not-a-valid-token", "", "!!!", "AAAA", &"A".repeat(500)] {
            assert_eq!(codec.decode(token), Err(TokenError::InvalidToken));
        }
    }

    #[test]
    fn test_decode_with_wrong_secret() {
        let codec1 = TokenCodec::new(b"secret1_at_least_32_bytes_long_key!");
        let codec2 = TokenCodec::new(b"secret2_at_least_32_bytes_long_key!");

        let payload = TokenPayload::new("user123", "alice").unwrap();
        let token = codec1.encode(&payload).unwrap();

        assert_eq!(codec2.decode(&token), Err(TokenError::InvalidToken));
    }

    #[test]
    fn test_decode_after_secret_rotation() {
        let old = codec();
        let payload = TokenPayload::new("user123", "alice").unwrap();
        let token = old.encode(&payload).unwrap();

        let rotated = TokenCodec::new(b"rotated_secret_at_least_32_bytes!!");
        assert_eq!(rotated.decode(&token), Err(TokenError::InvalidToken));
    }

    #[test]
    fn test_tampered_ciphertext_rejected() {
        let codec = codec();
        let payload = TokenPayload::new("user123", "alice").unwrap();
        let token = codec.encode(&payload).unwrap();

        let mut raw = URL_SAFE_NO_PAD.decode(&token).unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0x01;
        let tampered = URL_SAFE_NO_PAD.encode(raw);

        assert_eq!(codec.decode(&tampered), Err(TokenError::InvalidToken));
    }

    #[test]
    fn test_truncated_token_rejected() {
        let codec = codec();
        let payload = TokenPayload::new("user123", "alice").unwrap();
        let token = codec.encode(&payload).unwrap();

        assert_eq!(
            codec.decode(&token[..token.len() / 2]),
            Err(TokenError::InvalidToken)
        );
    }

    #[test]
    fn test_wrong_payload_shape_rejected() {
        let codec = codec();

        // Decrypts fine, but is not the two-field identity record.
        for plaintext in [
            &b"just a string"[..],
            br#"{"user_id":"u1"}"#,
            br#"{"user_id":"u1","username":"alice","extra":"x"}"#,
            br#"["u1","alice"]"#,
        ] {
            let forged = codec.encrypt_raw(plaintext);
            assert_eq!(codec.decode(&forged), Err(TokenError::InvalidToken));
        }
    }

    #[test]
    fn test_empty_field_in_plaintext_rejected() {
        let codec = codec();

        let forged = codec.encrypt_raw(br#"{"user_id":"u1","username":""}"#);
        assert_eq!(codec.decode(&forged), Err(TokenError::InvalidToken));
    }

    #[test]
    fn test_encode_is_randomized_but_stable_on_decode() {
        let codec = codec();
        let payload = TokenPayload::new("user123", "alice").unwrap();

        let token1 = codec.encode(&payload).unwrap();
        let token2 = codec.encode(&payload).unwrap();
        assert_ne!(token1, token2);

        assert_eq!(codec.decode(&token1).unwrap(), payload);
        assert_eq!(codec.decode(&token2).unwrap(), payload);
    }
}

use chrono::Duration;
use chrono::Utc;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// Error type for token operations.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to sign token: {0}")]
    SigningFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token is invalid: {0}")]
    Invalid(String),
}

/// Session token claims.
///
/// `exp` is mandatory: every issued token expires and [`TokenService::verify`]
/// rejects expired tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Username, carried for logging and display
    pub username: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Stateless session token issuance and verification.
///
/// Signs with HS256 using a process-wide secret injected at construction.
/// There is no server-side session store; the signature is the only thing
/// tying a token back to a login.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service.
    ///
    /// # Arguments
    /// * `secret` - signing secret; should be at least 32 bytes for HS256
    /// * `ttl_hours` - hours until an issued token expires
    pub fn new(secret: &[u8], ttl_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            algorithm: Algorithm::HS256,
            ttl: Duration::hours(ttl_hours),
        }
    }

    /// Issue a signed token for a user.
    ///
    /// # Errors
    /// * `SigningFailed` - token encoding failed
    pub fn issue(
        &self,
        user_id: impl ToString,
        username: impl ToString,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(self.algorithm), &claims, &self.encoding_key)
            .map_err(|e| TokenError::SigningFailed(e.to_string()))
    }

    /// Verify a token's signature and expiry, returning its claims.
    ///
    /// # Errors
    /// * `Expired` - the `exp` claim is in the past
    /// * `Invalid` - malformed token or signature mismatch
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let validation = Validation::new(self.algorithm);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

    #[test]
    fn test_issue_and_verify_round_trip() {
        let tokens = TokenService::new(SECRET, 24);

        let token = tokens.issue("user123", "alice").expect("Failed to issue");
        let claims = tokens.verify(&token).expect("Failed to verify");

        assert_eq!(claims.sub, "user123");
        assert_eq!(claims.username, "alice");
        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_verify_with_wrong_secret() {
        let issuer = TokenService::new(SECRET, 24);
        let verifier = TokenService::new(b"another_secret_key_32_bytes_long!!", 24);

        let token = issuer.issue("user123", "alice").expect("Failed to issue");

        assert!(matches!(
            verifier.verify(&token),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn test_verify_tampered_token() {
        let tokens = TokenService::new(SECRET, 24);
        let token = tokens.issue("user123", "alice").expect("Failed to issue");

        // Flip a byte in the payload section; the signature no longer matches.
        let mut bytes = token.into_bytes();
        let mid = bytes.len() / 2;
        bytes[mid] = if bytes[mid] == b'A' { b'B' } else { b'A' };
        let tampered = String::from_utf8(bytes).unwrap();

        assert!(tokens.verify(&tampered).is_err());
    }

    #[test]
    fn test_verify_expired_token() {
        let tokens = TokenService::new(SECRET, -1);

        let token = tokens.issue("user123", "alice").expect("Failed to issue");

        assert!(matches!(tokens.verify(&token), Err(TokenError::Expired)));
    }

    #[test]
    fn test_verify_garbage() {
        let tokens = TokenService::new(SECRET, 24);
        assert!(matches!(
            tokens.verify("not.a.token"),
            Err(TokenError::Invalid(_))
        ));
    }
}

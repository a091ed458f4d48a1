use chrono::Duration;
use jsonwebtoken::decode;
use jsonwebtoken::encode;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::Algorithm;
use jsonwebtoken::DecodingKey;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use jsonwebtoken::Validation;

use super::claims::Claims;
use super::config::TokenConfig;
use super::errors::JwtError;

/// An access/refresh credential pair issued at login.
///
/// Both tokens encode the same subject; only their lifetimes and kind tags
/// differ.
#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// Signed-token codec for issuing and verifying bearer credentials.
///
/// Uses HS256 (HMAC with SHA-256) with a process-wide symmetric secret.
/// Decoding verifies signature, structure, and expiry (with zero leeway) but
/// deliberately not the kind claim: a structurally valid refresh token decodes
/// fine, and the caller must check [`Claims::kind`] against the expected use.
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    algorithm: Algorithm,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenCodec {
    /// Create a codec from signing configuration.
    ///
    /// # Security Notes
    /// - The secret should be at least 256 bits (32 bytes) for HS256
    /// - Store secrets in environment variables or secure vaults, never in code
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            algorithm: Algorithm::HS256,
            access_ttl: config.access_ttl,
            refresh_ttl: config.refresh_ttl,
        }
    }

    /// Encode claims into a signed compact token.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token encoding failed
    pub fn encode(&self, claims: &Claims) -> Result<String, JwtError> {
        let header = Header::new(self.algorithm);

        encode(&header, claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingFailed(e.to_string()))
    }

    /// Issue an access token for the given subject, expiring after the
    /// configured access lifetime.
    pub fn issue_access(&self, subject: &str) -> Result<String, JwtError> {
        self.encode(&Claims::access(subject, self.access_ttl))
    }

    /// Issue a refresh token for the given subject, expiring after the
    /// configured refresh lifetime.
    pub fn issue_refresh(&self, subject: &str) -> Result<String, JwtError> {
        self.encode(&Claims::refresh(subject, self.refresh_ttl))
    }

    /// Issue the access/refresh pair handed out at login.
    pub fn issue_pair(&self, subject: &str) -> Result<TokenPair, JwtError> {
        Ok(TokenPair {
            access_token: self.issue_access(subject)?,
            refresh_token: self.issue_refresh(subject)?,
        })
    }

    /// Decode and validate a signed token.
    ///
    /// Expiry is checked against the current wall clock with zero leeway.
    ///
    /// # Errors
    /// * `TokenExpired` - The `exp` claim has passed
    /// * `InvalidToken` - Signature mismatch or malformed encoding
    pub fn decode(&self, token: &str) -> Result<Claims, JwtError> {
        let mut validation = Validation::new(self.algorithm);
        validation.leeway = 0;

        let token_data =
            decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                    _ => JwtError::InvalidToken(e.to_string()),
                }
            })?;

        Ok(token_data.claims)
    }
}

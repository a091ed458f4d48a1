use crate::jwt::Claims;
use crate::jwt::JwtError;
use crate::jwt::TokenCodec;
use crate::jwt::TokenConfig;
use crate::jwt::TokenPair;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and credential
/// issuance.
///
/// Constructed once at startup from a [`TokenConfig`] and shared by reference;
/// the signing secret never lives in a global.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    codec: TokenCodec,
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `config` - Signing secret and token lifetimes
    pub fn new(config: TokenConfig) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            codec: TokenCodec::new(&config),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify a plaintext password against a stored hash.
    ///
    /// A malformed stored hash verifies as false.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Issue the access/refresh token pair handed out at login.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_pair(&self, subject: &str) -> Result<TokenPair, JwtError> {
        self.codec.issue_pair(subject)
    }

    /// Issue a fresh access token only.
    ///
    /// Used by the refresh flow; no new refresh token is minted.
    ///
    /// # Errors
    /// * `JwtError` - Token generation failed
    pub fn issue_access(&self, subject: &str) -> Result<String, JwtError> {
        self.codec.issue_access(subject)
    }

    /// Validate and decode a presented token.
    ///
    /// Kind is not checked here; callers must compare [`Claims::kind`]
    /// against the expected use.
    ///
    /// # Errors
    /// * `JwtError` - Token validation or decoding failed
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        self.codec.decode(token)
    }
}

use chrono::Duration;

/// Token signing and lifetime configuration.
///
/// Constructed once at startup and handed to [`TokenCodec`]; nothing in this
/// crate reads signing material from ambient globals, so tests can run with a
/// distinct secret per instance.
///
/// [`TokenCodec`]: super::TokenCodec
#[derive(Debug, Clone)]
pub struct TokenConfig {
    /// Symmetric HS256 signing secret (should be at least 32 bytes).
    pub secret: String,
    /// Lifetime of access tokens.
    pub access_ttl: Duration,
    /// Lifetime of refresh tokens.
    pub refresh_ttl: Duration,
}

impl TokenConfig {
    const DEFAULT_ACCESS_TTL_MINUTES: i64 = 30;
    const DEFAULT_REFRESH_TTL_DAYS: i64 = 7;

    /// Create a configuration with the default lifetimes
    /// (30 minute access tokens, 7 day refresh tokens).
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_ttl: Duration::minutes(Self::DEFAULT_ACCESS_TTL_MINUTES),
            refresh_ttl: Duration::days(Self::DEFAULT_REFRESH_TTL_DAYS),
        }
    }

    /// Override the access token lifetime.
    pub fn with_access_ttl(mut self, ttl: Duration) -> Self {
        self.access_ttl = ttl;
        self
    }

    /// Override the refresh token lifetime.
    pub fn with_refresh_ttl(mut self, ttl: Duration) -> Self {
        self.refresh_ttl = ttl;
        self
    }
}

use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Discriminator between the two credential kinds.
///
/// Refresh tokens are explicitly tagged on the wire via a `token_type` claim;
/// access tokens carry no kind claim at all, so the tag only ever appears on
/// tokens that must not be usable as access credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Claims carried by a signed bearer credential.
///
/// The payload is deliberately fixed: `sub` (the user id as a string), `exp`
/// (Unix timestamp), and for refresh tokens a `token_type: "refresh"` tag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Subject (user identifier)
    pub sub: String,

    /// Expiration time (Unix timestamp)
    pub exp: i64,

    /// Kind tag; serialized only on refresh tokens
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_type: Option<TokenKind>,
}

impl Claims {
    /// Create access-token claims expiring `ttl` from now.
    pub fn access(subject: impl ToString, ttl: Duration) -> Self {
        Self {
            sub: subject.to_string(),
            exp: (Utc::now() + ttl).timestamp(),
            token_type: None,
        }
    }

    /// Create refresh-token claims expiring `ttl` from now.
    pub fn refresh(subject: impl ToString, ttl: Duration) -> Self {
        Self {
            sub: subject.to_string(),
            exp: (Utc::now() + ttl).timestamp(),
            token_type: Some(TokenKind::Refresh),
        }
    }

    /// Resolve the credential kind. An absent kind claim means access.
    pub fn kind(&self) -> TokenKind {
        self.token_type.unwrap_or(TokenKind::Access)
    }

    /// Check whether the claims are expired at the given timestamp.
    pub fn is_expired(&self, current_timestamp: i64) -> bool {
        self.exp < current_timestamp
    }
}

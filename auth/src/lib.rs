//! Authentication infrastructure library
//!
//! Provides the stateless authentication building blocks for the books API:
//! - Password hashing (Argon2id)
//! - Signed bearer credentials (JWT access/refresh pairs)
//! - Authentication coordination
//!
//! The service defines its own domain traits and adapts these implementations.
//! No server-side session state exists anywhere in this crate: a credential is
//! valid purely as a function of its signed payload and the current time, so
//! any number of replicas can verify tokens independently.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! ```
//!
//! ## Token Pairs
//! ```
//! use auth::{TokenCodec, TokenConfig, TokenKind};
//!
//! let codec = TokenCodec::new(&TokenConfig::new("secret_key_at_least_32_bytes_long!"));
//! let pair = codec.issue_pair("user123").unwrap();
//! let claims = codec.decode(&pair.access_token).unwrap();
//! assert_eq!(claims.sub, "user123");
//! assert_eq!(claims.kind(), TokenKind::Access);
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{Authenticator, TokenConfig, TokenKind};
//!
//! let auth = Authenticator::new(TokenConfig::new("secret_key_at_least_32_bytes_long!"));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue the access/refresh pair
//! assert!(auth.verify_password("password123", &hash));
//! let pair = auth.issue_pair("user123").unwrap();
//!
//! // Validate a presented token
//! let claims = auth.validate_token(&pair.refresh_token).unwrap();
//! assert_eq!(claims.kind(), TokenKind::Refresh);
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::TokenCodec;
pub use jwt::TokenConfig;
pub use jwt::TokenKind;
pub use jwt::TokenPair;
pub use password::PasswordError;
pub use password::PasswordHasher;

use async_trait::async_trait;
use auth::TokenPair;

use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;

/// Port for identity and authentication operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new account.
    ///
    /// The plaintext password is hashed exactly once here; the stored record
    /// never contains it.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - An account with this email is already registered
    /// * `DatabaseError` - Persistence operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Verify an email/password pair against the stored identity.
    ///
    /// Unknown email and wrong password fail identically.
    ///
    /// # Errors
    /// * `InvalidCredentials` - No such account or password mismatch
    /// * `DatabaseError` - Lookup failed
    async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError>;

    /// Authenticate and issue the access/refresh token pair.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Authentication failed (uniformly)
    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, UserError>;

    /// Exchange a refresh token for a fresh access token.
    ///
    /// The presented token must decode, carry the refresh kind tag, and
    /// resolve to a live identity. No new refresh token is issued.
    ///
    /// # Errors
    /// * `Unauthenticated` - Decode failure, wrong kind, or dangling subject
    async fn refresh(&self, refresh_token: &str) -> Result<String, UserError>;

    /// Resolve a bearer access token to a live identity.
    ///
    /// Invoked once per protected request. Tokens carrying the refresh kind
    /// tag are rejected here: a refresh credential is exchangeable only for a
    /// new access token, never usable as one.
    ///
    /// # Errors
    /// * `Unauthenticated` - Any token or lookup failure, uniformly
    async fn resolve_token(&self, token: &str) -> Result<User, UserError>;

    /// Retrieve an author account by id.
    ///
    /// # Errors
    /// * `NotFound` - No such user
    /// * `NotAnAuthor` - The account exists but is a reader
    async fn get_author(&self, id: &UserId) -> Result<User, UserError>;

    /// List author accounts with pagination.
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn list_authors(&self, skip: i64, limit: i64) -> Result<Vec<User>, UserError>;
}

/// Persistence operations for the identity aggregate.
///
/// The repository exclusively owns identity records; the service never caches
/// a user beyond a single request.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user.
    ///
    /// # Errors
    /// * `EmailAlreadyExists` - Email uniqueness violated
    /// * `DatabaseError` - Persistence operation failed
    async fn create(&self, user: User) -> Result<User, UserError>;

    /// Retrieve a user by identifier.
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError>;

    /// Retrieve a user by email (case-sensitive exact match).
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;

    /// Retrieve author accounts with pagination.
    ///
    /// # Errors
    /// * `DatabaseError` - Lookup failed
    async fn list_authors(&self, skip: i64, limit: i64) -> Result<Vec<User>, UserError>;
}

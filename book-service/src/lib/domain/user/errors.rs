use thiserror::Error;

/// Error for UserId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UserIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for EmailAddress validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("Invalid email format: {0}")]
    InvalidFormat(String),
}

/// Error for AccountType parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountTypeError {
    #[error("Unknown account type: {0} (expected 'author' or 'reader')")]
    Unknown(String),
}

/// Top-level error for identity and authentication operations.
///
/// The credential failures are deliberately coarse: `InvalidCredentials`
/// covers both unknown email and wrong password so callers cannot enumerate
/// accounts, and `Unauthenticated` covers every way a bearer token can fail
/// (missing, malformed, expired, mis-signed, wrong kind, dangling subject).
#[derive(Debug, Clone, Error)]
pub enum UserError {
    // Value object validation errors (automatically converted via #[from])
    #[error("Invalid user ID: {0}")]
    InvalidUserId(#[from] UserIdError),

    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Invalid account type: {0}")]
    InvalidAccountType(#[from] AccountTypeError),

    // Domain-level errors
    #[error("User not found: {0}")]
    NotFound(String),

    #[error("User is not an author: {0}")]
    NotAnAuthor(String),

    #[error("Email already registered: {0}")]
    EmailAlreadyExists(String),

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Could not validate credentials")]
    Unauthenticated,

    // Infrastructure errors
    #[error("Password error: {0}")]
    Password(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for UserError {
    fn from(err: anyhow::Error) -> Self {
        UserError::Unknown(err.to_string())
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use auth::Authenticator;
use auth::TokenKind;
use auth::TokenPair;
use chrono::Utc;

use crate::domain::user::models::AccountType;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::user::errors::UserError;
use crate::user::ports::UserRepository;
use crate::user::ports::UserServicePort;

/// Domain service implementation for identity and authentication operations.
///
/// Stateless: the only collaborators are the injected repository and the
/// authenticator (password hasher + token codec), both shared read-only.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    authenticator: Arc<Authenticator>,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    /// Create a new user service with injected dependencies.
    ///
    /// # Arguments
    /// * `repository` - Identity persistence implementation
    /// * `authenticator` - Password hashing and token issuance, constructed
    ///   once at startup from the signing configuration
    pub fn new(repository: Arc<UR>, authenticator: Arc<Authenticator>) -> Self {
        Self {
            repository,
            authenticator,
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if let Some(existing) = self.repository.find_by_email(command.email.as_str()).await? {
            return Err(UserError::EmailAlreadyExists(
                existing.email.as_str().to_string(),
            ));
        }

        let password_hash = self
            .authenticator
            .hash_password(&command.password)
            .map_err(|e| UserError::Password(e.to_string()))?;

        let user = User {
            id: UserId::new(),
            email: command.email,
            first_name: command.first_name,
            last_name: command.last_name,
            password_hash,
            account_type: command.account_type,
            created_at: Utc::now(),
        };

        self.repository.create(user).await
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<User, UserError> {
        // Unknown email and wrong password are indistinguishable to the caller
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(UserError::InvalidCredentials)?;

        if !self
            .authenticator
            .verify_password(password, &user.password_hash)
        {
            return Err(UserError::InvalidCredentials);
        }

        Ok(user)
    }

    async fn login(&self, email: &str, password: &str) -> Result<TokenPair, UserError> {
        let user = self.authenticate(email, password).await?;

        self.authenticator
            .issue_pair(&user.id.to_string())
            .map_err(|e| UserError::Token(e.to_string()))
    }

    async fn refresh(&self, refresh_token: &str) -> Result<String, UserError> {
        let claims = self
            .authenticator
            .validate_token(refresh_token)
            .map_err(|_| UserError::Unauthenticated)?;

        if claims.kind() != TokenKind::Refresh {
            return Err(UserError::Unauthenticated);
        }

        let user_id =
            UserId::from_string(&claims.sub).map_err(|_| UserError::Unauthenticated)?;

        // The subject must still resolve to a live identity
        let user = self
            .repository
            .find_by_id(&user_id)
            .await?
            .ok_or(UserError::Unauthenticated)?;

        self.authenticator
            .issue_access(&user.id.to_string())
            .map_err(|e| UserError::Token(e.to_string()))
    }

    async fn resolve_token(&self, token: &str) -> Result<User, UserError> {
        let claims = self
            .authenticator
            .validate_token(token)
            .map_err(|_| UserError::Unauthenticated)?;

        // Refresh credentials are exchangeable, never directly usable
        if claims.kind() != TokenKind::Access {
            return Err(UserError::Unauthenticated);
        }

        let user_id =
            UserId::from_string(&claims.sub).map_err(|_| UserError::Unauthenticated)?;

        self.repository
            .find_by_id(&user_id)
            .await?
            .ok_or(UserError::Unauthenticated)
    }

    async fn get_author(&self, id: &UserId) -> Result<User, UserError> {
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))?;

        if user.account_type != AccountType::Author {
            return Err(UserError::NotAnAuthor(id.to_string()));
        }

        Ok(user)
    }

    async fn list_authors(&self, skip: i64, limit: i64) -> Result<Vec<User>, UserError> {
        self.repository.list_authors(skip, limit).await
    }
}

//! Registration, login and profile management.

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::domain::{NewUser, ProfileChanges, User, normalize_email};
use crate::error::{DomainError, RepoError};
use crate::ports::{PasswordService, TokenService, UserRepository};

const EMAIL_TAKEN: &str = "Email already registered";

/// A user together with a freshly issued bearer token.
#[derive(Debug, Clone)]
pub struct Session {
    pub user: User,
    pub token: String,
    pub expires_in: i64,
}

/// User account operations.
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    passwords: Arc<dyn PasswordService>,
    tokens: Arc<dyn TokenService>,
}

impl AccountService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        passwords: Arc<dyn PasswordService>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            users,
            passwords,
            tokens,
        }
    }

    /// Create an account and sign the new user in.
    pub async fn register(&self, mut registration: NewUser) -> Result<Session, DomainError> {
        registration.email = normalize_email(&registration.email);
        registration.validate()?;

        if self
            .users
            .find_by_email(&registration.email)
            .await?
            .is_some()
        {
            return Err(DomainError::Duplicate(EMAIL_TAKEN.to_string()));
        }

        // The plaintext never leaves this function.
        let password_hash = self.passwords.hash(&registration.password)?;
        let user = self
            .users
            .save(User::new(registration, password_hash))
            .await
            .map_err(email_conflict)?;

        tracing::info!(user_id = %user.id, "User registered");
        self.issue_session(user)
    }

    /// Authenticate by email and password.
    ///
    /// Unknown email and wrong password fail identically.
    pub async fn login(&self, email: &str, password: &str) -> Result<Session, DomainError> {
        let email = normalize_email(email);

        let user = self
            .users
            .find_by_email(&email)
            .await?
            .ok_or(DomainError::InvalidCredentials)?;

        if !self.passwords.verify(password, &user.password_hash)? {
            tracing::debug!(user_id = %user.id, "Password mismatch");
            return Err(DomainError::InvalidCredentials);
        }

        self.issue_session(user)
    }

    /// Load the profile of an authenticated user.
    pub async fn profile(&self, user_id: Uuid) -> Result<User, DomainError> {
        self.users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User", user_id))
    }

    /// Apply a partial profile update.
    pub async fn update_profile(
        &self,
        user_id: Uuid,
        mut changes: ProfileChanges,
    ) -> Result<User, DomainError> {
        changes.email = changes.email.as_deref().map(normalize_email);
        changes.validate()?;

        let mut user = self.profile(user_id).await?;

        if let Some(email) = changes.email.as_deref() {
            if email != user.email {
                if let Some(other) = self.users.find_by_email(email).await? {
                    if other.id != user.id {
                        return Err(DomainError::Duplicate(EMAIL_TAKEN.to_string()));
                    }
                }
            }
        }

        let password_hash = changes
            .password
            .as_deref()
            .map(|password| self.passwords.hash(password))
            .transpose()?;

        user.apply(changes, password_hash);
        let user = self.users.save(user).await.map_err(email_conflict)?;

        tracing::info!(user_id = %user.id, "Profile updated");
        Ok(user)
    }

    fn issue_session(&self, user: User) -> Result<Session, DomainError> {
        let token = self.tokens.generate_token(user.id, &user.email)?;
        Ok(Session {
            user,
            token,
            expires_in: self.tokens.expiration_seconds(),
        })
    }
}

/// The unique index on `email` lost a race with a concurrent write.
fn email_conflict(err: RepoError) -> DomainError {
    match err {
        RepoError::Duplicate(_) => DomainError::Duplicate(EMAIL_TAKEN.to_string()),
        other => other.into(),
    }
}

//! Port doubles for service tests.

use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Dream, DreamFilter, InterpretationHints, InterpretationRequest, User};
use crate::error::RepoError;
use crate::ports::{
    AuthError, BaseRepository, DreamRepository, InterpretationProvider, PasswordService,
    ProviderError, TokenClaims, TokenService, UserRepository,
};

#[derive(Default)]
pub(crate) struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
}

impl InMemoryUsers {
    pub(crate) fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUsers {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        Ok(self.rows.lock().unwrap().iter().find(|u| u.id == id).cloned())
    }

    async fn save(&self, user: User) -> Result<User, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        if rows.iter().any(|u| u.email == user.email && u.id != user.id) {
            return Err(RepoError::Duplicate("users_email_key".to_string()));
        }
        rows.retain(|u| u.id != user.id);
        rows.push(user.clone());
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }
}

#[derive(Default)]
pub(crate) struct InMemoryDreams {
    rows: Mutex<Vec<Dream>>,
}

impl InMemoryDreams {
    pub(crate) fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    /// Insert bypassing the service, e.g. with a chosen `created_at`.
    pub(crate) fn put(&self, dream: Dream) {
        self.rows.lock().unwrap().push(dream);
    }
}

#[async_trait]
impl DreamRepository for InMemoryDreams {
    async fn insert(&self, dream: Dream) -> Result<Dream, RepoError> {
        self.put(dream.clone());
        Ok(dream)
    }

    async fn find_owned(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Dream>, RepoError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == id && d.owner_id == owner_id)
            .cloned())
    }

    async fn list_by_owner(
        &self,
        owner_id: Uuid,
        filter: &DreamFilter,
    ) -> Result<Vec<Dream>, RepoError> {
        let mut dreams: Vec<Dream> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.owner_id == owner_id && filter.matches(d))
            .cloned()
            .collect();
        dreams.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(dreams)
    }

    async fn update_owned(&self, dream: Dream) -> Result<Option<Dream>, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        match rows
            .iter_mut()
            .find(|d| d.id == dream.id && d.owner_id == dream.owner_id)
        {
            Some(row) => {
                *row = dream.clone();
                Ok(Some(dream))
            }
            None => Ok(None),
        }
    }

    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> Result<bool, RepoError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|d| !(d.id == id && d.owner_id == owner_id));
        Ok(rows.len() != before)
    }
}

/// "Hashes" by prefixing, so tests can assert on stored values.
pub(crate) struct PlainPasswords;

impl PasswordService for PlainPasswords {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        Ok(format!("hashed:{password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

pub(crate) struct FakeTokens;

impl TokenService for FakeTokens {
    fn generate_token(&self, user_id: Uuid, _email: &str) -> Result<String, AuthError> {
        Ok(format!("token:{user_id}"))
    }

    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let id = token
            .strip_prefix("token:")
            .and_then(|s| Uuid::parse_str(s).ok())
            .ok_or_else(|| AuthError::InvalidToken("unrecognized".to_string()))?;
        Ok(TokenClaims {
            user_id: id,
            email: String::new(),
            exp: i64::MAX,
        })
    }

    fn expiration_seconds(&self) -> i64 {
        3600
    }
}

/// Answers with the title and the hints joined by `|`.
pub(crate) struct EchoProvider;

#[async_trait]
impl InterpretationProvider for EchoProvider {
    async fn interpret(
        &self,
        request: &InterpretationRequest,
        hints: &InterpretationHints,
    ) -> Result<String, ProviderError> {
        Ok(format!(
            "{}|{}|{}|{}",
            request.title,
            hints.age.map(|a| a.to_string()).unwrap_or_default(),
            hints.gender.map(|g| g.to_string()).unwrap_or_default(),
            hints
                .marital_status
                .map(|m| m.to_string())
                .unwrap_or_default(),
        ))
    }
}

pub(crate) struct FailingProvider;

#[async_trait]
impl InterpretationProvider for FailingProvider {
    async fn interpret(
        &self,
        _request: &InterpretationRequest,
        _hints: &InterpretationHints,
    ) -> Result<String, ProviderError> {
        Err(ProviderError::RateLimited)
    }
}

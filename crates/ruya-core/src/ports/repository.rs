use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Dream, DreamFilter, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;
}

/// User repository with domain-specific methods.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their (normalized) email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;
}

/// Dream repository.
///
/// Every lookup and write is keyed by `(id, owner_id)` together, so a dream
/// owned by someone else behaves exactly like a missing one.
#[async_trait]
pub trait DreamRepository: Send + Sync {
    /// Persist a new dream.
    async fn insert(&self, dream: Dream) -> Result<Dream, RepoError>;

    /// Find a dream by id, only if `owner_id` owns it.
    async fn find_owned(&self, id: Uuid, owner_id: Uuid) -> Result<Option<Dream>, RepoError>;

    /// All dreams of an owner matching `filter`, newest first, ties broken by id.
    async fn list_by_owner(
        &self,
        owner_id: Uuid,
        filter: &DreamFilter,
    ) -> Result<Vec<Dream>, RepoError>;

    /// Overwrite the mutable fields of an owned dream.
    /// Returns `None` when no row matched `(dream.id, dream.owner_id)`.
    async fn update_owned(&self, dream: Dream) -> Result<Option<Dream>, RepoError>;

    /// Delete an owned dream. Returns `false` when nothing matched.
    async fn delete_owned(&self, id: Uuid, owner_id: Uuid) -> Result<bool, RepoError>;
}

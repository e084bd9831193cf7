//! Ownership-scoped dream record operations.

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::domain::{Dream, DreamChanges, DreamFilter, NewDream};
use crate::error::DomainError;
use crate::ports::DreamRepository;

const ENTITY: &str = "Dream";

/// Dream record operations. `owner_id` always comes from the verified
/// session, never from the request body.
pub struct DreamService {
    dreams: Arc<dyn DreamRepository>,
}

impl DreamService {
    pub fn new(dreams: Arc<dyn DreamRepository>) -> Self {
        Self { dreams }
    }

    pub async fn create(&self, owner_id: Uuid, draft: NewDream) -> Result<Dream, DomainError> {
        draft.validate()?;

        let dream = self.dreams.insert(Dream::new(owner_id, draft)).await?;

        tracing::info!(dream_id = %dream.id, owner_id = %owner_id, "Dream created");
        Ok(dream)
    }

    /// Newest first.
    pub async fn list(
        &self,
        owner_id: Uuid,
        filter: DreamFilter,
    ) -> Result<Vec<Dream>, DomainError> {
        let filter = filter.normalized();
        Ok(self.dreams.list_by_owner(owner_id, &filter).await?)
    }

    pub async fn get(&self, owner_id: Uuid, id: Uuid) -> Result<Dream, DomainError> {
        self.dreams
            .find_owned(id, owner_id)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))
    }

    /// Merge `changes` into the dream; omitted fields keep their values.
    pub async fn update(
        &self,
        owner_id: Uuid,
        id: Uuid,
        changes: DreamChanges,
    ) -> Result<Dream, DomainError> {
        changes.validate()?;

        let mut dream = self.get(owner_id, id).await?;
        dream.apply(changes);

        // A concurrent delete between the read and the write surfaces as None.
        let dream = self
            .dreams
            .update_owned(dream)
            .await?
            .ok_or_else(|| DomainError::not_found(ENTITY, id))?;

        tracing::info!(dream_id = %id, owner_id = %owner_id, "Dream updated");
        Ok(dream)
    }

    pub async fn set_favorite(
        &self,
        owner_id: Uuid,
        id: Uuid,
        is_favorite: bool,
    ) -> Result<Dream, DomainError> {
        self.update(owner_id, id, DreamChanges::favorite(is_favorite))
            .await
    }

    pub async fn delete(&self, owner_id: Uuid, id: Uuid) -> Result<(), DomainError> {
        if !self.dreams.delete_owned(id, owner_id).await? {
            return Err(DomainError::not_found(ENTITY, id));
        }

        tracing::info!(dream_id = %id, owner_id = %owner_id, "Dream deleted");
        Ok(())
    }
}

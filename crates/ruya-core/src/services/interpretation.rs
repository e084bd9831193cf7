use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::domain::{InterpretationHints, InterpretationRequest};
use crate::error::DomainError;
use crate::ports::{InterpretationProvider, UserRepository};

/// Requests an interpretation for the caller's dream, using their profile
/// as demographic context. Nothing is persisted here.
pub struct InterpretationService {
    provider: Arc<dyn InterpretationProvider>,
    users: Arc<dyn UserRepository>,
}

impl InterpretationService {
    pub fn new(provider: Arc<dyn InterpretationProvider>, users: Arc<dyn UserRepository>) -> Self {
        Self { provider, users }
    }

    pub async fn interpret(
        &self,
        user_id: Uuid,
        request: InterpretationRequest,
    ) -> Result<String, DomainError> {
        request.validate()?;

        let hints = self
            .users
            .find_by_id(user_id)
            .await?
            .map(|user| InterpretationHints::from(&user))
            .unwrap_or_default();

        let text = self
            .provider
            .interpret(&request, &hints)
            .await
            .inspect_err(|e| tracing::warn!(user_id = %user_id, error = %e, "Interpretation failed"))?;

        Ok(text)
    }
}

//! Interpretation provider port - the external text-generation service.

use async_trait::async_trait;

use crate::domain::{InterpretationHints, InterpretationRequest};

/// Turns a dream description into interpretive prose.
#[async_trait]
pub trait InterpretationProvider: Send + Sync {
    async fn interpret(
        &self,
        request: &InterpretationRequest,
        hints: &InterpretationHints,
    ) -> Result<String, ProviderError>;
}

/// Interpretation failures. All of them are worth retrying later.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Provider is not configured")]
    NotConfigured,

    #[error("Provider request failed: {0}")]
    Transport(String),

    #[error("Provider rate limit reached")]
    RateLimited,

    #[error("Provider returned status {status}")]
    Status { status: u16, body: String },

    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

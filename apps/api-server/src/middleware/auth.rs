//! Authentication extractor.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpRequest, dev::Payload, http::header, web};
use uuid::Uuid;

use ruya_core::ports::{AuthError, TokenClaims};

use crate::middleware::error::AppError;
use crate::state::AppState;

const UNAUTHENTICATED: &str = "Please provide a valid Bearer token in the Authorization header.";

/// Authenticated caller identity.
///
/// Use this in handlers to require authentication:
/// ```ignore
/// async fn protected_route(identity: Identity) -> impl Responder {
///     format!("Hello, user {}!", identity.user_id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: Uuid,
}

impl From<TokenClaims> for Identity {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
        }
    }
}

impl Identity {
    fn extract(req: &HttpRequest) -> Result<Self, AuthError> {
        let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
            tracing::error!("AppState not found in app data");
            AuthError::InvalidToken("server configuration error".to_string())
        })?;

        let auth_header = req
            .headers()
            .get(header::AUTHORIZATION)
            .ok_or(AuthError::MissingAuth)?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AuthError::InvalidToken("invalid authorization header".to_string()))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::InvalidToken("expected Bearer token".to_string()))?;

        state.tokens.validate_token(token).map(Identity::from)
    }
}

impl FromRequest for Identity {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        // Every failure looks the same to the client.
        ready(Identity::extract(req).map_err(|e| {
            tracing::debug!(reason = %e, path = %req.path(), "Rejected credentials");
            AppError::Unauthorized(UNAUTHENTICATED.to_string())
        }))
    }
}

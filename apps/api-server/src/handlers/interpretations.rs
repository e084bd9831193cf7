//! Interpretation handler.

use actix_web::{HttpResponse, web};

use ruya_core::domain::InterpretationRequest;
use ruya_shared::ApiResponse;
use ruya_shared::dto::{InterpretDreamRequest, InterpretationResponse};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

/// POST /api/interpretations
///
/// Returns the provider's text without storing it; the client saves it
/// through `POST /api/dreams`.
pub async fn interpret(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<InterpretDreamRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let request = InterpretationRequest {
        title: req.title,
        description: req.description,
        category: req.category,
    };

    let interpretation = state
        .interpretations
        .interpret(identity.user_id, request)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(InterpretationResponse { interpretation })))
}

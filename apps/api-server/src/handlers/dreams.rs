//! Dream record handlers. Every route is scoped to the caller.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use ruya_core::domain::{Dream, DreamChanges, DreamFilter, NewDream};
use ruya_shared::ApiResponse;
use ruya_shared::dto::{
    CreateDreamRequest, DreamListQuery, DreamResponse, FavoriteRequest, UpdateDreamRequest,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

fn dream_response(dream: Dream) -> DreamResponse {
    DreamResponse {
        id: dream.id.to_string(),
        user_id: dream.owner_id.to_string(),
        title: dream.title,
        content: dream.content,
        category: dream.category,
        interpretation: dream.interpretation,
        is_favorite: dream.is_favorite,
        created_at: dream.created_at.to_rfc3339(),
        updated_at: dream.updated_at.to_rfc3339(),
    }
}

/// POST /api/dreams
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreateDreamRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let draft = NewDream {
        title: req.title,
        content: req.content,
        category: req.category,
        // Absent is treated as blank and rejected by validation.
        interpretation: req.interpretation.unwrap_or_default(),
    };

    let dream = state.dreams.create(identity.user_id, draft).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        dream_response(dream),
        "Dream saved",
    )))
}

/// GET /api/dreams?favorite=&category=&q=
pub async fn list(
    state: web::Data<AppState>,
    identity: Identity,
    query: web::Query<DreamListQuery>,
) -> AppResult<HttpResponse> {
    let query = query.into_inner();
    let filter = DreamFilter {
        favorite: query.favorite,
        category: query.category,
        search: query.q,
    };

    let dreams = state.dreams.list(identity.user_id, filter).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::list(
        dreams.into_iter().map(dream_response).collect(),
    )))
}

/// GET /api/dreams/{id}
pub async fn get(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let dream = state.dreams.get(identity.user_id, path.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(dream_response(dream))))
}

/// PUT /api/dreams/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<UpdateDreamRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let changes = DreamChanges {
        title: req.title,
        content: req.content,
        category: req.category,
        interpretation: req.interpretation,
        is_favorite: req.is_favorite,
    };

    let dream = state
        .dreams
        .update(identity.user_id, path.into_inner(), changes)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(
        dream_response(dream),
        "Dream updated",
    )))
}

/// PATCH /api/dreams/{id}/favorite
pub async fn set_favorite(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
    body: web::Json<FavoriteRequest>,
) -> AppResult<HttpResponse> {
    let dream = state
        .dreams
        .set_favorite(identity.user_id, path.into_inner(), body.is_favorite)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok(dream_response(dream))))
}

/// DELETE /api/dreams/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    state
        .dreams
        .delete(identity.user_id, path.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::acknowledged("Dream deleted")))
}

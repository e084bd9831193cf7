//! Account handlers.

use actix_web::{HttpResponse, web};

use ruya_core::Session;
use ruya_core::domain::{Gender, MaritalStatus, NewUser, ProfileChanges, User};
use ruya_core::error::DomainError;
use ruya_shared::dto::{
    AuthResponse, LoginRequest, RegisterUserRequest, UpdateProfileRequest, UserResponse,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::AppResult;
use crate::state::AppState;

pub(crate) fn user_response(user: User) -> UserResponse {
    UserResponse {
        id: user.id.to_string(),
        first_name: user.first_name,
        last_name: user.last_name,
        email: user.email,
        phone: user.phone,
        age: user.age,
        gender: user.gender.to_string(),
        marital_status: user.marital_status.to_string(),
        profile_image: user.profile_image,
        created_at: user.created_at.to_rfc3339(),
        updated_at: user.updated_at.to_rfc3339(),
    }
}

fn auth_response(session: Session) -> AuthResponse {
    AuthResponse {
        user: user_response(session.user),
        token: session.token,
        token_type: "Bearer".to_string(),
        expires_in: session.expires_in.max(0) as u64,
    }
}

fn parse_optional<T>(value: Option<String>) -> Result<Option<T>, DomainError>
where
    T: std::str::FromStr<Err = DomainError>,
{
    value.as_deref().map(str::parse).transpose()
}

/// POST /api/auth/register
pub async fn register(
    state: web::Data<AppState>,
    body: web::Json<RegisterUserRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let registration = NewUser {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        phone: req.phone,
        password: req.password,
        age: req.age,
        gender: req.gender.parse::<Gender>()?,
        marital_status: req.marital_status.parse::<MaritalStatus>()?,
        profile_image: req.profile_image,
    };

    let session = state.accounts.register(registration).await?;

    Ok(HttpResponse::Created().json(auth_response(session)))
}

/// POST /api/auth/login
pub async fn login(
    state: web::Data<AppState>,
    body: web::Json<LoginRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let session = state.accounts.login(&req.email, &req.password).await?;

    Ok(HttpResponse::Ok().json(auth_response(session)))
}

/// GET /api/auth/profile
pub async fn profile(
    state: web::Data<AppState>,
    identity: Identity,
) -> AppResult<HttpResponse> {
    let user = state.accounts.profile(identity.user_id).await?;

    Ok(HttpResponse::Ok().json(user_response(user)))
}

/// PUT /api/auth/profile
pub async fn update_profile(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<UpdateProfileRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let changes = ProfileChanges {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        phone: req.phone,
        password: req.password,
        age: req.age,
        gender: parse_optional(req.gender)?,
        marital_status: parse_optional(req.marital_status)?,
        profile_image: req.profile_image,
    };

    let user = state
        .accounts
        .update_profile(identity.user_id, changes)
        .await?;

    Ok(HttpResponse::Ok().json(user_response(user)))
}

//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterUserRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub age: i32,
    pub gender: String,
    pub marital_status: String,
    #[serde(default)]
    pub profile_image: Option<String>,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Partial profile update. Omitted fields are left unchanged;
/// an empty `profileImage` removes the image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateProfileRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub password: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub marital_status: Option<String>,
    pub profile_image: Option<String>,
}

/// Public profile of a user. Never carries the password.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub age: i32,
    pub gender: String,
    pub marital_status: String,
    pub profile_image: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Profile fields flattened next to the issued token.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Request to save a dream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateDreamRequest {
    pub title: String,
    pub content: String,
    pub category: Option<String>,
    pub interpretation: Option<String>,
}

/// Partial dream update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateDreamRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<String>,
    pub interpretation: Option<String>,
    pub is_favorite: Option<bool>,
}

/// Body of the favorite toggle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteRequest {
    pub is_favorite: bool,
}

/// Query string of the dream listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DreamListQuery {
    pub favorite: Option<bool>,
    pub category: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DreamResponse {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub content: String,
    pub category: String,
    pub interpretation: String,
    pub is_favorite: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Request to interpret a dream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpretDreamRequest {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterpretationResponse {
    pub interpretation: String,
}

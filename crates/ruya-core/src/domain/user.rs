use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::not_blank;
use crate::error::DomainError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
        }
    }
}

impl FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            _ => Err(DomainError::Validation(
                "gender: must be one of male, female, other".to_string(),
            )),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "single",
            MaritalStatus::Married => "married",
            MaritalStatus::Divorced => "divorced",
            MaritalStatus::Widowed => "widowed",
        }
    }
}

impl FromStr for MaritalStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(MaritalStatus::Single),
            "married" => Ok(MaritalStatus::Married),
            "divorced" => Ok(MaritalStatus::Divorced),
            "widowed" => Ok(MaritalStatus::Widowed),
            _ => Err(DomainError::Validation(
                "maritalStatus: must be one of single, married, divorced, widowed".to_string(),
            )),
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical form used for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// User entity - an account holder who owns dreams.
///
/// `password_hash` is the only form of the password that ever reaches this type.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub age: i32,
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    pub profile_image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with generated ID and timestamps.
    pub fn new(registration: NewUser, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            first_name: registration.first_name.trim().to_string(),
            last_name: registration.last_name.trim().to_string(),
            email: normalize_email(&registration.email),
            phone: registration.phone.trim().to_string(),
            password_hash,
            age: registration.age,
            gender: registration.gender,
            marital_status: registration.marital_status,
            profile_image: registration.profile_image.filter(|s| !s.trim().is_empty()),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge the provided fields, leaving the rest untouched.
    ///
    /// The plaintext `password` of `changes` is ignored; callers pass the
    /// already computed hash instead.
    pub fn apply(&mut self, changes: ProfileChanges, password_hash: Option<String>) {
        if let Some(first_name) = changes.first_name {
            self.first_name = first_name.trim().to_string();
        }
        if let Some(last_name) = changes.last_name {
            self.last_name = last_name.trim().to_string();
        }
        if let Some(email) = changes.email {
            self.email = normalize_email(&email);
        }
        if let Some(phone) = changes.phone {
            self.phone = phone.trim().to_string();
        }
        if let Some(hash) = password_hash {
            self.password_hash = hash;
        }
        if let Some(age) = changes.age {
            self.age = age;
        }
        if let Some(gender) = changes.gender {
            self.gender = gender;
        }
        if let Some(status) = changes.marital_status {
            self.marital_status = status;
        }
        if let Some(image) = changes.profile_image {
            // An empty string clears the image.
            self.profile_image = Some(image).filter(|s| !s.trim().is_empty());
        }
        self.updated_at = Utc::now();
    }
}

/// Registration command.
#[derive(Debug, Clone, Validate)]
pub struct NewUser {
    #[validate(custom(function = "not_blank"))]
    pub first_name: String,
    #[validate(custom(function = "not_blank"))]
    pub last_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(custom(function = "not_blank"))]
    pub phone: String,
    #[validate(length(min = 6, max = 100, message = "must be between 6 and 100 characters"))]
    pub password: String,
    #[validate(range(min = 18, max = 120, message = "must be between 18 and 120"))]
    pub age: i32,
    pub gender: Gender,
    pub marital_status: MaritalStatus,
    pub profile_image: Option<String>,
}

/// Partial profile update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, Validate)]
pub struct ProfileChanges {
    #[validate(custom(function = "not_blank"))]
    pub first_name: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub last_name: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(custom(function = "not_blank"))]
    pub phone: Option<String>,
    #[validate(length(min = 6, max = 100, message = "must be between 6 and 100 characters"))]
    pub password: Option<String>,
    #[validate(range(min = 18, max = 120, message = "must be between 18 and 120"))]
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub marital_status: Option<MaritalStatus>,
    pub profile_image: Option<String>,
}

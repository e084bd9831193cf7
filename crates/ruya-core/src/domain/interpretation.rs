use validator::Validate;

use super::not_blank;
use super::{Gender, MaritalStatus, User};

/// A dream submitted for interpretation.
#[derive(Debug, Clone, Validate)]
pub struct InterpretationRequest {
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    #[validate(custom(function = "not_blank"))]
    pub description: String,
    pub category: Option<String>,
}

/// Demographic context passed along with the dream.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InterpretationHints {
    pub age: Option<i32>,
    pub gender: Option<Gender>,
    pub marital_status: Option<MaritalStatus>,
}

impl From<&User> for InterpretationHints {
    fn from(user: &User) -> Self {
        Self {
            age: Some(user.age),
            gender: Some(user.gender),
            marital_status: Some(user.marital_status),
        }
    }
}

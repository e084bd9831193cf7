//! Domain entities - the core business objects.

mod dream;
mod interpretation;
mod user;

pub use dream::{DEFAULT_CATEGORY, Dream, DreamChanges, DreamFilter, NewDream};
pub use interpretation::{InterpretationHints, InterpretationRequest};
pub use user::{Gender, MaritalStatus, NewUser, ProfileChanges, User, normalize_email};

use std::borrow::Cow;

use validator::ValidationError;

/// Rejects strings that are empty or whitespace only.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be empty")));
    }
    Ok(())
}

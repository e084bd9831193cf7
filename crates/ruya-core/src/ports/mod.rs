//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod auth;
mod interpretation;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use interpretation::{InterpretationProvider, ProviderError};
pub use repository::{BaseRepository, DreamRepository, UserRepository};

//! # Ruya Infrastructure
//!
//! Concrete implementations of the ports defined in `ruya-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `postgres` - Relational persistence via SeaORM
//! - `auth` - JWT + Argon2 authentication
//! - `openrouter` - Dream interpretation through the OpenRouter chat API

pub mod interpretation;

#[cfg(feature = "postgres")]
pub mod database;

#[cfg(feature = "auth")]
pub mod auth;

pub use interpretation::{UnconfiguredInterpreter, format_interpretation};

#[cfg(feature = "postgres")]
pub use database::{DatabaseConfig, SqlDreamRepository, SqlUserRepository, connect};

#[cfg(feature = "auth")]
pub use auth::{Argon2PasswordService, JwtConfig, JwtTokenService};

#[cfg(feature = "openrouter")]
pub use interpretation::{OpenRouterConfig, OpenRouterInterpreter};

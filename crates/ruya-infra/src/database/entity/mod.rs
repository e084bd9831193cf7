//! SeaORM entities and their mapping to domain types.

pub mod dream;
pub mod user;

//! Relational persistence via SeaORM.

mod connections;
pub mod entity;
mod sql_base;
mod sql_repo;

pub use connections::{DatabaseConfig, connect};
pub use sql_base::SqlBaseRepository;
pub use sql_repo::{SqlDreamRepository, SqlUserRepository};

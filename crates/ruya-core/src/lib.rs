//! # Ruya Core
//!
//! The domain layer of the dream journal backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! entities, the ports infrastructure must implement, and the services that
//! enforce account and dream-ownership rules on top of those ports.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::{AccountService, DreamService, InterpretationService, Session};

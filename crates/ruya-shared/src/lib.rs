//! # Ruya Shared
//!
//! Wire types shared between the API server and its clients.
//! Field names are camelCase on the wire.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};

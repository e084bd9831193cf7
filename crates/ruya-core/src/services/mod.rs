//! Domain services - the operations exposed to delivery layers.
//!
//! Services depend only on ports. Validation happens here, before any
//! repository is touched.

mod account;
mod dream;
mod interpretation;

#[cfg(test)]
pub(crate) mod fakes;

pub use account::{AccountService, Session};
pub use dream::DreamService;
pub use interpretation::InterpretationService;

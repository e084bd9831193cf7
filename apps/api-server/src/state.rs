//! Application state - shared across all handlers.

use std::sync::Arc;

use sea_orm::DbConn;

use ruya_core::ports::{
    DreamRepository, InterpretationProvider, PasswordService, TokenService, UserRepository,
};
use ruya_core::{AccountService, DreamService, InterpretationService};
use ruya_infra::{SqlDreamRepository, SqlUserRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub accounts: Arc<AccountService>,
    pub dreams: Arc<DreamService>,
    pub interpretations: Arc<InterpretationService>,
    /// Read by the `Identity` extractor.
    pub tokens: Arc<dyn TokenService>,
    pub db: DbConn,
}

impl AppState {
    /// Wire the services over SQL repositories on `db`.
    pub fn new(
        db: DbConn,
        tokens: Arc<dyn TokenService>,
        passwords: Arc<dyn PasswordService>,
        interpreter: Arc<dyn InterpretationProvider>,
    ) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(SqlUserRepository::new(db.clone()));
        let dreams: Arc<dyn DreamRepository> = Arc::new(SqlDreamRepository::new(db.clone()));

        Self {
            accounts: Arc::new(AccountService::new(
                users.clone(),
                passwords,
                tokens.clone(),
            )),
            dreams: Arc::new(DreamService::new(dreams)),
            interpretations: Arc::new(InterpretationService::new(interpreter, users)),
            tokens,
            db,
        }
    }
}

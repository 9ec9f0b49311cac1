use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::security_config::SecurityConfig;
use crate::auth::{BcryptHasher, PasswordHasher, TokenIssuer, TokenVerifier};

/// Shared resources handed to every worker.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent in tests that never reach persistence)
    db: Option<DatabaseConnection>,
    pub security: SecurityConfig,
    pub issuer: TokenIssuer,
    pub verifier: TokenVerifier,
    pub passwords: Arc<dyn PasswordHasher>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, security: SecurityConfig) -> Self {
        Self::assemble(Some(db), security)
    }

    pub fn new_without_db(security: SecurityConfig) -> Self {
        Self::assemble(None, security)
    }

    fn assemble(db: Option<DatabaseConnection>, security: SecurityConfig) -> Self {
        Self {
            db,
            issuer: TokenIssuer::new(security.clone()),
            verifier: TokenVerifier::new(security.clone()),
            security,
            passwords: Arc::new(BcryptHasher::default()),
        }
    }

    pub fn with_password_hasher(mut self, hasher: Arc<dyn PasswordHasher>) -> Self {
        self.passwords = hasher;
        self
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}

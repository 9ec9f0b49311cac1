use std::sync::Arc;

use todo_backend::{build_state, AppError, AppState, BcryptHasher, DbProfile, SecurityConfig};

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET.as_bytes().to_vec())
}

/// Fresh migrated in-memory database per call; minimum bcrypt cost.
pub async fn build_test_state() -> Result<AppState, AppError> {
    build_test_state_with(test_security()).await
}

pub async fn build_test_state_with(security: SecurityConfig) -> Result<AppState, AppError> {
    build_state()
        .with_db(DbProfile::InMemory)
        .with_security(security)
        .with_password_hasher(Arc::new(BcryptHasher::new(4)))
        .build()
        .await
}

use std::sync::Arc;

use crate::auth::PasswordHasher;
use crate::config::db::DbProfile;
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builder for [`AppState`], used by both `main` and tests.
pub struct StateBuilder {
    security_config: SecurityConfig,
    db_profile: Option<DbProfile>,
    password_hasher: Option<Arc<dyn PasswordHasher>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            db_profile: None,
            password_hasher: None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    pub fn with_password_hasher(mut self, hasher: Arc<dyn PasswordHasher>) -> Self {
        self.password_hasher = Some(hasher);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let state = match self.db_profile {
            // single entrypoint: connect + migrate
            Some(profile) => AppState::new(bootstrap_db(profile).await?, self.security_config),
            None => AppState::new_without_db(self.security_config),
        };

        Ok(match self.password_hasher {
            Some(hasher) => state.with_password_hasher(hasher),
            None => state,
        })
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::BcryptHasher;

    #[tokio::test]
    async fn builds_without_db() {
        let state = build_state()
            .with_security(SecurityConfig::for_tests())
            .build()
            .await
            .unwrap();
        assert!(state.db().is_none());
    }

    #[tokio::test]
    async fn builds_with_in_memory_db_and_custom_hasher() {
        let state = build_state()
            .with_db(DbProfile::InMemory)
            .with_security(SecurityConfig::for_tests())
            .with_password_hasher(Arc::new(BcryptHasher::new(4)))
            .build()
            .await
            .unwrap();
        assert!(state.db().is_some());
        assert!(format!("{:?}", state.passwords).contains("cost: 4"));
    }
}

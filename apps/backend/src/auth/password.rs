use std::fmt::Debug;

use crate::errors::domain::{DomainError, InfraErrorKind};

/// One-way password storage.
///
/// Both operations are CPU-bound; callers run them off the async executor.
pub trait PasswordHasher: Debug + Send + Sync {
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// `Ok(false)` for a wrong password; `Err` only when `hash` is unreadable.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError>;
}

#[derive(Debug, Clone, Copy)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new(bcrypt::DEFAULT_COST)
    }
}

impl PasswordHasher for BcryptHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, self.cost).map_err(|e| {
            DomainError::infra(InfraErrorKind::Other("bcrypt".into()), format!("hash: {e}"))
        })
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, DomainError> {
        bcrypt::verify(password, hash).map_err(|e| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("stored password hash unreadable: {e}"),
            )
        })
    }
}

use std::env;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Where the application's database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbProfile {
    /// Any sea-orm connection URL (`postgres://…`, `sqlite://…`).
    Url(String),
    /// Private SQLite database in memory. One pooled connection, so the
    /// migrated schema is visible to every query.
    InMemory,
}

impl DbProfile {
    /// Profile from `DATABASE_URL`; a missing variable is a configuration error.
    pub fn from_env() -> Result<Self, AppError> {
        let url = env::var("DATABASE_URL").map_err(|_| {
            AppError::config(
                ErrorCode::ConfigError,
                "Required environment variable 'DATABASE_URL' is not set",
            )
        })?;
        Self::from_url(url)
    }

    pub fn from_url(url: impl Into<String>) -> Result<Self, AppError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(AppError::config(
                ErrorCode::ConfigError,
                "DATABASE_URL must not be empty",
            ));
        }
        if url == "sqlite::memory:" {
            return Ok(DbProfile::InMemory);
        }
        Ok(DbProfile::Url(url))
    }

    pub fn url(&self) -> &str {
        match self {
            DbProfile::Url(url) => url,
            DbProfile::InMemory => "sqlite::memory:",
        }
    }
}

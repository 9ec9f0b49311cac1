#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod services;
pub mod state;
pub mod trace_ctx;

#[cfg(test)]
pub mod test_bootstrap;

pub use auth::{
    BcryptHasher, Claims, PasswordHasher, Principal, TokenError, TokenIssuer, TokenVerifier,
};
pub use config::db::DbProfile;
pub use config::server::ServerConfig;
pub use error::{AppError, ProblemDetails};
pub use errors::{DomainError, ErrorCode};
pub use extractors::{AuthToken, CurrentUser, TodoId, ValidatedJson, ValidatedQuery};
pub use infra::db::{bootstrap_db, connect_db, require_db, with_txn};
pub use infra::state::{build_state, StateBuilder};
pub use middleware::{cors_middleware, RequestTrace, StructuredLogger, TraceSpan};
pub use state::app_state::AppState;
pub use state::security_config::{SecurityConfig, SignatureScheme};

#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}

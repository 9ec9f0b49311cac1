//! Registration and login: the only places credentials are issued.

use std::sync::Arc;

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use tracing::info;

use crate::auth::{PasswordHasher, Principal, TokenIssuer};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError};
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::repos::users::{self, User};

pub const MIN_PASSWORD_LEN: usize = 6;
const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Debug, Clone, Deserialize)]
pub struct RegisterInput {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

/// A user as shown to clients; never carries the password hash.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<User> for PublicUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            created_at: user.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    pub user: PublicUser,
    pub token: String,
}

/// `local@domain` with both sides non-empty and no whitespace.
pub fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

fn validate_registration(input: &RegisterInput) -> Result<(), DomainError> {
    if !is_plausible_email(input.email.trim()) {
        return Err(DomainError::validation("Invalid email address"));
    }
    if input.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    if input.name.trim().is_empty() {
        return Err(DomainError::validation("Name is required"));
    }
    Ok(())
}

async fn hash_password(
    passwords: &Arc<dyn PasswordHasher>,
    password: String,
) -> Result<String, AppError> {
    let hasher = Arc::clone(passwords);
    tokio::task::spawn_blocking(move || hasher.hash(&password))
        .await
        .map_err(|e| AppError::internal(format!("password hashing task failed: {e}")))?
        .map_err(AppError::from)
}

async fn password_matches(
    passwords: &Arc<dyn PasswordHasher>,
    password: String,
    hash: String,
) -> Result<bool, AppError> {
    let hasher = Arc::clone(passwords);
    tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
        .await
        .map_err(|e| AppError::internal(format!("password check task failed: {e}")))?
        .map_err(AppError::from)
}

fn issue_for(issuer: &TokenIssuer, user: User) -> AuthResponse {
    let token = issuer.issue(&Principal::new(user.id, user.email.clone()));
    AuthResponse {
        user: PublicUser::from(user),
        token,
    }
}

/// Create an account and sign the new user in.
pub async fn register<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    passwords: &Arc<dyn PasswordHasher>,
    issuer: &TokenIssuer,
    input: RegisterInput,
) -> Result<AuthResponse, AppError> {
    validate_registration(&input)?;
    let email = input.email.trim().to_string();
    let name = input.name.trim().to_string();

    if users::find_user_by_email(conn, &email).await?.is_some() {
        info!(email = %Redacted(&email), "registration rejected: email taken");
        return Err(DomainError::conflict(
            ConflictKind::UniqueEmail,
            "User with this email already exists",
        )
        .into());
    }

    let password_hash = hash_password(passwords, input.password).await?;
    // the unique index still catches a concurrent registration
    let user = users::create_user(conn, &email, &name, &password_hash).await?;

    info!(user_id = user.id, email = %Redacted(&user.email), "user registered");
    Ok(issue_for(issuer, user))
}

/// Exchange email and password for a credential.
///
/// Unknown email and wrong password produce the same error.
pub async fn login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    passwords: &Arc<dyn PasswordHasher>,
    issuer: &TokenIssuer,
    input: LoginInput,
) -> Result<AuthResponse, AppError> {
    let email = input.email.trim();

    let Some(user) = users::find_user_by_email(conn, email).await? else {
        security::login_failed("unknown_email", email);
        return Err(DomainError::unauthorized(INVALID_CREDENTIALS).into());
    };

    if !password_matches(passwords, input.password, user.password_hash.clone()).await? {
        security::login_failed("wrong_password", email);
        return Err(DomainError::unauthorized(INVALID_CREDENTIALS).into());
    }

    info!(user_id = user.id, email = %Redacted(&user.email), "user logged in");
    Ok(issue_for(issuer, user))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(email: &str, password: &str, name: &str) -> RegisterInput {
        RegisterInput {
            email: email.into(),
            password: password.into(),
            name: name.into(),
        }
    }

    #[test]
    fn email_shape() {
        assert!(is_plausible_email("a@b.com"));
        assert!(is_plausible_email("x@localhost"));
        assert!(!is_plausible_email("no-at-sign"));
        assert!(!is_plausible_email("@b.com"));
        assert!(!is_plausible_email("a@"));
        assert!(!is_plausible_email("a@b@c"));
        assert!(!is_plausible_email("a b@c.d"));
    }

    #[test]
    fn registration_rules() {
        assert!(validate_registration(&input("a@b.com", "secret", "Ann")).is_ok());
        assert!(validate_registration(&input(" a@b.com ", "secret", "Ann")).is_ok());

        for bad in [
            input("nope", "secret", "Ann"),
            input("a@b.com", "12345", "Ann"),
            input("a@b.com", "secret", "   "),
        ] {
            assert!(matches!(
                validate_registration(&bad),
                Err(DomainError::Validation(_))
            ));
        }
    }
}

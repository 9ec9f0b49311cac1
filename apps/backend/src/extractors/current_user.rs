//! The access gate: every todo handler takes a [`CurrentUser`].

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use serde::Serialize;
use tracing::error;

use super::auth_token::AuthToken;
use crate::auth::{Claims, TokenError, TokenVerifier};
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

/// Identity recovered from a verified credential.
///
/// This is the only source of the owner id for todo operations; ids in
/// request bodies or query strings are never consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub id: i64,
    pub email: String,
}

impl From<Claims> for CurrentUser {
    fn from(claims: Claims) -> Self {
        Self {
            id: claims.user_id,
            email: claims.email,
        }
    }
}

impl CurrentUser {
    /// Header parsing plus verification, without touching the request.
    pub fn authenticate(
        headers: &actix_web::http::header::HeaderMap,
        verifier: &TokenVerifier,
    ) -> Result<Self, TokenError> {
        let token = AuthToken::from_headers(headers)?;
        verifier.verify(&token.token).map(CurrentUser::from)
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            error!("AppState missing from request");
            return ready(Err(AppError::internal("AppState not available")));
        };

        // every failure reason collapses into one response
        ready(
            Self::authenticate(req.headers(), &state.verifier).map_err(|e| {
                security::token_rejected(e, req.path());
                AppError::unauthorized()
            }),
        )
    }
}

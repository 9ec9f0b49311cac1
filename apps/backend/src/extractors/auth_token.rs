use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::http::header::{self, HeaderMap};
use actix_web::{FromRequest, HttpRequest};

use crate::auth::TokenError;
use crate::error::AppError;
use crate::logging::security;

/// Raw credential from `Authorization: Bearer <token>`. Not yet verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken {
    pub token: String,
}

impl AuthToken {
    /// An absent or blank header, or a bare scheme, is `MissingToken`; any
    /// other scheme or an unreadable header is `MalformedFormat`.
    pub fn from_headers(headers: &HeaderMap) -> Result<Self, TokenError> {
        let Some(value) = headers.get(header::AUTHORIZATION) else {
            return Err(TokenError::MissingToken);
        };
        let value = value.to_str().map_err(|_| TokenError::MalformedFormat)?;
        if value.trim().is_empty() {
            return Err(TokenError::MissingToken);
        }

        let mut parts = value.split_whitespace();
        let (Some(scheme), token, None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TokenError::MalformedFormat);
        };
        if !scheme.eq_ignore_ascii_case("Bearer") {
            return Err(TokenError::MalformedFormat);
        }

        match token {
            Some(token) => Ok(AuthToken {
                token: token.to_string(),
            }),
            None => Err(TokenError::MissingToken),
        }
    }
}

impl FromRequest for AuthToken {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::from_headers(req.headers()).map_err(|e| {
            security::token_rejected(e, req.path());
            AppError::unauthorized()
        }))
    }
}

use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Positive todo id from the `{id}` path segment. Existence and ownership are
/// checked by the service, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TodoId(pub i64);

impl TodoId {
    pub fn parse(raw: &str) -> Result<Self, AppError> {
        let id = raw.parse::<i64>().map_err(|_| {
            AppError::bad_request(ErrorCode::InvalidId, format!("Invalid todo id: {raw}"))
        })?;
        if id <= 0 {
            return Err(AppError::bad_request(
                ErrorCode::InvalidId,
                format!("Todo id must be positive, got: {id}"),
            ));
        }
        Ok(TodoId(id))
    }
}

impl FromRequest for TodoId {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(match req.match_info().get("id") {
            Some(raw) => Self::parse(raw),
            None => Err(AppError::bad_request(
                ErrorCode::InvalidId,
                "Missing id parameter",
            )),
        })
    }
}

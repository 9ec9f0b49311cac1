//! Token header/payload shapes and the identity recovered from them.

use serde::{Deserialize, Serialize};

use serde_json::Value;

use super::codec::{ALGORITHM, TOKEN_TYPE};
use super::error::TokenError;

/// The authenticated identity a token is issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: i64,
    pub email: String,
}

impl Principal {
    pub fn new(id: i64, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }
}

/// Header check on the decoded first segment. Anything other than an object
/// with string `alg == "HS256"` and `typ == "JWT"` is unsupported, whatever
/// the JSON types involved.
pub(crate) fn header_is_supported(header: &Value) -> bool {
    header.get("alg").and_then(Value::as_str) == Some(ALGORITHM)
        && header.get("typ").and_then(Value::as_str) == Some(TOKEN_TYPE)
}

/// Decoded second segment, before normalization.
///
/// Read field by field from untyped JSON so an odd type counts as an absent
/// claim instead of failing the decode. `id` is the key one older producer
/// wrote instead of `userId`.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct RawPayload {
    pub user_id: Option<i64>,
    pub id: Option<i64>,
    pub email: Option<String>,
    pub iat: Option<f64>,
    pub exp: Option<f64>,
}

/// Positive integer, given either as a JSON integer or a decimal string.
fn positive_id(value: &Value) -> Option<i64> {
    let id = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    id.filter(|id| *id > 0)
}

impl RawPayload {
    /// Non-object payloads yield an empty `RawPayload`.
    pub fn from_value(payload: &Value) -> Self {
        Self {
            user_id: payload.get("userId").and_then(positive_id),
            id: payload.get("id").and_then(positive_id),
            email: payload
                .get("email")
                .and_then(Value::as_str)
                .filter(|email| !email.is_empty())
                .map(str::to_string),
            iat: payload.get("iat").and_then(Value::as_f64),
            exp: payload.get("exp").and_then(Value::as_f64),
        }
    }

    /// Resolve the `userId`/`id` alias and require an email.
    ///
    /// Fractional time claims are truncated to whole seconds.
    pub fn normalize(&self) -> Result<Claims, TokenError> {
        let user_id = self
            .user_id
            .or(self.id)
            .ok_or(TokenError::MissingUserId)?;

        let email = self.email.clone().ok_or(TokenError::MissingEmail)?;

        Ok(Claims {
            user_id,
            email,
            iat: self.iat.map(|t| t as i64),
            exp: self.exp.map(|t| t as i64),
        })
    }
}

/// Verified token contents, always keyed by `userId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub email: String,
    /// Issued-at (seconds since epoch)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expiry (seconds since epoch)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    pub fn principal(&self) -> Principal {
        Principal::new(self.user_id, self.email.clone())
    }
}

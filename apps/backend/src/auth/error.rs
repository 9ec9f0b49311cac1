use thiserror::Error;

/// Why a credential was rejected.
///
/// The verifier stops at the first failing check, so exactly one of these is
/// reported per token. The access gate turns every variant into the same
/// 401 response and logs [`TokenError::reason`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenError {
    #[error("Token is required")]
    MissingToken,
    #[error("Invalid token format")]
    MalformedFormat,
    #[error("Unsupported token type or algorithm")]
    UnsupportedAlgorithm,
    #[error("Token missing user ID")]
    MissingUserId,
    #[error("Token missing email")]
    MissingEmail,
    #[error("Token expired")]
    Expired,
    #[error("Token issued in the future")]
    IssuedInFuture,
    #[error("Invalid token signature")]
    InvalidSignature,
}

impl TokenError {
    /// Stable snake_case label for structured logs
    pub fn reason(&self) -> &'static str {
        match self {
            TokenError::MissingToken => "missing_token",
            TokenError::MalformedFormat => "malformed_format",
            TokenError::UnsupportedAlgorithm => "unsupported_algorithm",
            TokenError::MissingUserId => "missing_user_id",
            TokenError::MissingEmail => "missing_email",
            TokenError::Expired => "expired",
            TokenError::IssuedInFuture => "issued_in_future",
            TokenError::InvalidSignature => "invalid_signature",
        }
    }
}

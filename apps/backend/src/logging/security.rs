//! Security-relevant events, logged with a stable `event` field so they can be
//! filtered out of the JSON stream.

use tracing::warn;

use crate::auth::TokenError;
use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// A login attempt that did not produce a token.
pub fn login_failed(reason: &str, email: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        email = %Redacted(email),
        reason,
        "Authentication failure"
    );
}

/// A request reached the access gate with an unusable credential.
pub fn token_rejected(error: TokenError, path: &str) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_TOKEN_REJECTED",
        %trace_id,
        reason = error.reason(),
        path,
        "Credential rejected"
    );
}

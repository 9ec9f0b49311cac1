use std::time::SystemTime;

use serde_json::Value;

use super::claims::{header_is_supported, Claims, RawPayload};
use super::codec::{decode_json, signature_matches, unix_seconds};
use super::error::TokenError;
use crate::state::security_config::SecurityConfig;

/// Turns an opaque credential back into a trusted identity.
#[derive(Debug, Clone)]
pub struct TokenVerifier {
    security: SecurityConfig,
}

impl TokenVerifier {
    pub fn new(security: SecurityConfig) -> Self {
        Self { security }
    }

    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        self.verify_at(token, SystemTime::now())
    }

    /// Verify `token` against the clock value `now`.
    ///
    /// Checks run in a fixed order and the first failure wins: presence,
    /// shape, decoding, header, required fields, expiry, issued-at skew and
    /// finally the signature. Structural problems therefore never pay for a
    /// signature computation. Time checks come before the signature check,
    /// so an expired forgery reports `Expired` rather than `InvalidSignature`.
    pub fn verify_at(&self, token: &str, now: SystemTime) -> Result<Claims, TokenError> {
        if token.is_empty() {
            return Err(TokenError::MissingToken);
        }

        let parts: Vec<&str> = token.split('.').collect();
        let [header, payload, signature] = parts.as_slice() else {
            return Err(TokenError::MalformedFormat);
        };

        // only base64url and JSON syntax can fail here; types are judged later
        let decoded_header: Value = decode_json(header)?;
        let decoded_payload: Value = decode_json(payload)?;

        if !header_is_supported(&decoded_header) {
            return Err(TokenError::UnsupportedAlgorithm);
        }

        let raw = RawPayload::from_value(&decoded_payload);
        let claims = raw.normalize()?;

        // compared unrounded so fractional claims keep their meaning
        let now = unix_seconds(now) as f64;
        if let Some(exp) = raw.exp {
            if exp < now {
                return Err(TokenError::Expired);
            }
        }
        if let Some(iat) = raw.iat {
            if iat > now + self.security.clock_skew.as_secs_f64() {
                return Err(TokenError::IssuedInFuture);
            }
        }

        if !signature_matches(header, payload, signature, &self.security) {
            return Err(TokenError::InvalidSignature);
        }

        Ok(claims)
    }
}

//! Segment encoding and signature primitives shared by issuer and verifier.

use std::time::{SystemTime, UNIX_EPOCH};

use base64::alphabet;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine as _;
use hmac::{Hmac, Mac};
use serde::de::DeserializeOwned;
use sha2::Sha256;
use subtle::ConstantTimeEq;

use super::error::TokenError;
use crate::state::security_config::{SecurityConfig, SignatureScheme};

type HmacSha256 = Hmac<Sha256>;

pub const ALGORITHM: &str = "HS256";
pub const TOKEN_TYPE: &str = "JWT";

/// Decoder that tolerates trailing `=` padding some producers still emit.
/// Encoding always uses [`URL_SAFE_NO_PAD`].
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

pub fn encode_segment(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

pub fn decode_segment(segment: &str) -> Result<Vec<u8>, TokenError> {
    URL_SAFE_LENIENT
        .decode(segment)
        .map_err(|_| TokenError::MalformedFormat)
}

/// base64url-decode a segment and parse it as JSON.
pub(crate) fn decode_json<T: DeserializeOwned>(segment: &str) -> Result<T, TokenError> {
    let bytes = decode_segment(segment)?;
    serde_json::from_slice(&bytes).map_err(|_| TokenError::MalformedFormat)
}

/// Compute the signature segment for already-encoded header and payload.
pub fn sign(header: &str, payload: &str, security: &SecurityConfig) -> String {
    match security.scheme {
        SignatureScheme::Legacy => {
            let secret = &security.jwt_secret;
            let mut input = Vec::with_capacity(header.len() + payload.len() + secret.len() + 2);
            input.extend_from_slice(header.as_bytes());
            input.push(b'.');
            input.extend_from_slice(payload.as_bytes());
            input.push(b'.');
            input.extend_from_slice(secret);
            encode_segment(&input)
        }
        SignatureScheme::HmacSha256 => {
            let mut mac = match HmacSha256::new_from_slice(&security.jwt_secret) {
                Ok(mac) => mac,
                // HMAC takes keys of any length (RFC 2104)
                Err(_) => unreachable!("HMAC-SHA256 rejected a key"),
            };
            mac.update(header.as_bytes());
            mac.update(b".");
            mac.update(payload.as_bytes());
            encode_segment(&mac.finalize().into_bytes())
        }
    }
}

/// Recompute the signature and compare it with `provided` in constant time.
pub fn signature_matches(
    header: &str,
    payload: &str,
    provided: &str,
    security: &SecurityConfig,
) -> bool {
    let expected = sign(header, payload, security);
    expected.as_bytes().ct_eq(provided.as_bytes()).into()
}

/// Seconds since the unix epoch; negative before it.
pub fn unix_seconds(at: SystemTime) -> i64 {
    match at.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    }
}

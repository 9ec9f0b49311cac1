use std::str::FromStr;
use std::time::Duration;

use crate::error::AppError;
use crate::errors::ErrorCode;

/// Secret used when `JWT_SECRET` is unset. Insecure; production must override it.
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key";

/// Credential lifetime: `exp = iat + 7 days`.
pub const TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Tolerated drift between issuer and verifier clocks when checking `iat`.
pub const CLOCK_SKEW: Duration = Duration::from_secs(60);

/// How the third token segment is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureScheme {
    /// base64url of `"<header>.<payload>.<secret>"`. Wire compatible with the
    /// tokens already in circulation, but not a keyed hash: anyone holding a
    /// token can read the secret back out of its signature.
    #[default]
    Legacy,
    /// base64url of HMAC-SHA256(secret, `"<header>.<payload>"`), i.e. a
    /// standard HS256 JWT. Not accepted by legacy verifiers.
    HmacSha256,
}

impl SignatureScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureScheme::Legacy => "legacy",
            SignatureScheme::HmacSha256 => "hmac-sha256",
        }
    }
}

impl FromStr for SignatureScheme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(SignatureScheme::Legacy),
            "hmac-sha256" | "hs256" => Ok(SignatureScheme::HmacSha256),
            other => Err(AppError::config(
                ErrorCode::ConfigError,
                format!("unknown JWT_SIGNATURE_SCHEME '{other}' (expected 'legacy' or 'hmac-sha256')"),
            )),
        }
    }
}

/// Signing configuration shared by the token issuer and verifier.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// Process-wide signing secret, never embedded in tokens
    pub jwt_secret: Vec<u8>,
    pub scheme: SignatureScheme,
    pub token_ttl: Duration,
    pub clock_skew: Duration,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given secret and the legacy scheme
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            scheme: SignatureScheme::default(),
            token_ttl: TOKEN_TTL,
            clock_skew: CLOCK_SKEW,
        }
    }

    pub fn with_scheme(mut self, scheme: SignatureScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Read `JWT_SECRET` and `JWT_SIGNATURE_SCHEME` from the environment.
    ///
    /// A missing secret falls back to [`DEFAULT_JWT_SECRET`]; an unknown
    /// scheme name is a configuration error.
    pub fn from_env() -> Result<Self, AppError> {
        let secret = std::env::var("JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string());

        let scheme = match std::env::var("JWT_SIGNATURE_SCHEME") {
            Ok(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => SignatureScheme::default(),
        };

        Ok(Self::new(secret.into_bytes()).with_scheme(scheme))
    }

    /// True when running on the built-in fallback secret
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET.as_bytes()
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self::new(b"test_secret_key_for_testing_purposes_only".to_vec())
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(DEFAULT_JWT_SECRET.as_bytes().to_vec())
    }
}

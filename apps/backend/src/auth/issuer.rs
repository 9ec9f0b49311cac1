use std::time::SystemTime;

use serde_json::json;

use super::claims::Principal;
use super::codec::{encode_segment, sign, unix_seconds, ALGORITHM, TOKEN_TYPE};
use crate::state::security_config::SecurityConfig;

/// Mints credentials for principals that have already been authenticated.
#[derive(Debug, Clone)]
pub struct TokenIssuer {
    security: SecurityConfig,
}

impl TokenIssuer {
    pub fn new(security: SecurityConfig) -> Self {
        Self { security }
    }

    /// Issue a token valid for the configured TTL starting now.
    pub fn issue(&self, principal: &Principal) -> String {
        self.issue_at(principal, SystemTime::now())
    }

    /// Issue a token as if the current time were `now`.
    ///
    /// `iat = now`, `exp = iat + ttl`. Header and payload are encoded
    /// independently and the signature is computed over the encoded text.
    pub fn issue_at(&self, principal: &Principal, now: SystemTime) -> String {
        let iat = unix_seconds(now);
        let exp = iat + self.security.token_ttl.as_secs() as i64;

        let header = json!({ "alg": ALGORITHM, "typ": TOKEN_TYPE });
        let payload = json!({
            "userId": principal.id,
            "email": principal.email,
            "iat": iat,
            "exp": exp,
        });

        let header = encode_segment(header.to_string().as_bytes());
        let payload = encode_segment(payload.to_string().as_bytes());
        let signature = sign(&header, &payload, &self.security);

        format!("{header}.{payload}.{signature}")
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use super::*;
    use crate::auth::codec::decode_segment;

    fn segments(token: &str) -> Vec<serde_json::Value> {
        token
            .split('.')
            .take(2)
            .map(|s| serde_json::from_slice(&decode_segment(s).unwrap()).unwrap())
            .collect()
    }

    #[test]
    fn token_has_three_unpadded_segments() {
        let issuer = TokenIssuer::new(SecurityConfig::for_tests());
        let token = issuer.issue(&Principal::new(1, "x@y.z"));
        assert_eq!(token.split('.').count(), 3);
        assert!(!token.contains('='));
        assert!(!token.contains('+') && !token.contains('/'));
    }

    #[test]
    fn header_and_payload_contents() {
        let issuer = TokenIssuer::new(SecurityConfig::for_tests());
        let now = UNIX_EPOCH + Duration::from_secs(1000);
        let token = issuer.issue_at(&Principal::new(42, "a@b.com"), now);

        let parts = segments(&token);
        assert_eq!(parts[0], json!({ "alg": "HS256", "typ": "JWT" }));
        assert_eq!(
            parts[1],
            json!({ "userId": 42, "email": "a@b.com", "iat": 1000, "exp": 605_800 })
        );
    }

    #[test]
    fn secret_never_appears_in_payload() {
        let security = SecurityConfig::new(b"super-secret-value".to_vec());
        let token = TokenIssuer::new(security).issue(&Principal::new(5, "e@f.g"));
        let parts = segments(&token);
        assert!(!parts[0].to_string().contains("super-secret-value"));
        assert!(!parts[1].to_string().contains("super-secret-value"));
    }

    #[test]
    fn issuing_is_deterministic_for_a_fixed_clock() {
        let issuer = TokenIssuer::new(SecurityConfig::for_tests());
        let now = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let principal = Principal::new(9, "same@example.com");
        assert_eq!(issuer.issue_at(&principal, now), issuer.issue_at(&principal, now));
    }
}

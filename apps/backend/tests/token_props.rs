mod common;

use std::time::{Duration, UNIX_EPOCH};

use proptest::prelude::*;
use todo_backend::{
    Principal, SecurityConfig, SignatureScheme, TokenError, TokenIssuer, TokenVerifier,
};

fn scheme() -> impl Strategy<Value = SignatureScheme> {
    prop_oneof![Just(SignatureScheme::Legacy), Just(SignatureScheme::HmacSha256)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn issued_tokens_verify_back_to_the_principal(
        id in 1i64..i64::MAX / 2,
        email in "[a-z0-9._]{1,16}@[a-z]{1,10}\\.[a-z]{2,4}",
        secret in proptest::collection::vec(any::<u8>(), 1..64),
        scheme in scheme(),
        issued_at in 0u64..4_000_000_000,
        elapsed in 0u64..=604_800,
    ) {
        let security = SecurityConfig::new(secret).with_scheme(scheme);
        let issuer = TokenIssuer::new(security.clone());
        let verifier = TokenVerifier::new(security);

        let now = UNIX_EPOCH + Duration::from_secs(issued_at);
        let token = issuer.issue_at(&Principal::new(id, email.clone()), now);
        let claims = verifier
            .verify_at(&token, now + Duration::from_secs(elapsed))
            .expect("token verifies inside its lifetime");

        prop_assert_eq!(claims.principal(), Principal::new(id, email));
        prop_assert_eq!(claims.iat, Some(issued_at as i64));
        prop_assert_eq!(claims.exp, Some(issued_at as i64 + 604_800));
    }

    #[test]
    fn changing_any_character_breaks_verification(
        id in 1i64..1_000_000,
        scheme in scheme(),
        segment in 0usize..3,
        position in any::<prop::sample::Index>(),
    ) {
        let security = SecurityConfig::new(b"property-secret".to_vec()).with_scheme(scheme);
        let issuer = TokenIssuer::new(security.clone());
        let verifier = TokenVerifier::new(security);

        let now = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
        let token = issuer.issue_at(&Principal::new(id, "p@q.rs"), now);

        let mut segments: Vec<Vec<u8>> =
            token.split('.').map(|s| s.as_bytes().to_vec()).collect();
        let target = &mut segments[segment];
        let at = position.index(target.len());
        target[at] = if target[at] == b'A' { b'B' } else { b'A' };
        let tampered = segments
            .into_iter()
            .map(|s| String::from_utf8(s).unwrap())
            .collect::<Vec<_>>()
            .join(".");

        let result = verifier.verify_at(&tampered, now);
        prop_assert!(result.is_err(), "tampered token verified: {:?}", result);
        if segment == 2 {
            prop_assert_eq!(result, Err(TokenError::InvalidSignature));
        }
    }

    #[test]
    fn arbitrary_strings_never_verify(input in ".{0,200}") {
        let verifier = TokenVerifier::new(SecurityConfig::new(b"k".to_vec()));
        prop_assert!(verifier.verify(&input).is_err());
    }
}

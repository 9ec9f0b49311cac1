//! Credential issuance and verification.
//!
//! `codec`, `issuer` and `verifier` are free of HTTP and database types; the
//! access gate in [`crate::extractors::current_user`] is the only place a
//! [`TokenError`] meets a request.

pub mod claims;
pub mod codec;
pub mod error;
pub mod issuer;
pub mod password;
pub mod verifier;

pub use claims::{Claims, Principal};
pub use error::TokenError;
pub use issuer::TokenIssuer;
pub use password::{BcryptHasher, PasswordHasher};
pub use verifier::TokenVerifier;

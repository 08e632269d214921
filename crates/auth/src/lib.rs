//! `gestao-auth` — credential hashing and session tokens.
//!
//! Decoupled from HTTP and storage: the API layer feeds it passwords and
//! claims, it hands back hashes and signed tokens.

pub mod claims;
pub mod password;
pub mod token;

pub use claims::JwtClaims;
pub use password::{hash_password, verify_password};
pub use token::{AuthError, TokenService};

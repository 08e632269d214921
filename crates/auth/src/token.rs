//! HS256 session token issuing and validation.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use gestao_core::{TenantId, UserId};

use crate::claims::JwtClaims;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error("token rejected: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),
}

/// Issues and validates HS256 session tokens with a shared secret.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    pub fn new(secret: &str, ttl_minutes: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::minutes(ttl_minutes),
        }
    }

    /// Sign a token for an authenticated user.
    pub fn issue(
        &self,
        user: UserId,
        tenant: TenantId,
        empresa_fantasia: String,
        email: String,
        perfil: String,
    ) -> Result<String, AuthError> {
        let claims = JwtClaims {
            id_usuario: user,
            id_empresa: tenant,
            empresa_fantasia,
            email,
            perfil,
            exp: (Utc::now() + self.ttl).timestamp(),
        };
        let token = jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)?;
        Ok(token)
    }

    /// Decode and verify signature plus expiry.
    pub fn validate(&self, token: &str) -> Result<JwtClaims, AuthError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = jsonwebtoken::decode::<JwtClaims>(token, &self.decoding, &validation)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 30)
    }

    fn issue(svc: &TokenService) -> String {
        svc.issue(
            UserId::new(1),
            TenantId::new(7),
            "Acme".into(),
            "a@b.com".into(),
            "admin".into(),
        )
        .unwrap()
    }

    #[test]
    fn issue_then_validate_roundtrip() {
        let svc = service();
        let claims = svc.validate(&issue(&svc)).unwrap();
        assert_eq!(claims.id_usuario, UserId::new(1));
        assert_eq!(claims.id_empresa, TenantId::new(7));
        assert_eq!(claims.perfil, "admin");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = issue(&service());
        let other = TokenService::new("another-secret", 30);
        assert!(other.validate(&token).is_err());
    }

    #[test]
    fn expired_token_is_rejected() {
        let svc = TokenService::new("test-secret", -5);
        let token = issue(&svc);
        assert!(TokenService::new("test-secret", 30).validate(&token).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(service().validate("not.a.jwt").is_err());
    }
}

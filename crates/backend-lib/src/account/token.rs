// ============================
// crates/backend-lib/src/account/token.rs
// ============================
//! Signed access token issuance.
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use gatekeeper_common::Role;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Identity and role to embed in an issued token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    pub id: String,
    pub role: Role,
}

/// JWT claims layout: subject, role and the standard timestamp pair
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

/// Trait for access token issuance
///
/// Callers treat the returned token as an opaque bearer credential.
#[async_trait]
pub trait TokenIssuer: Send + Sync {
    async fn issue(&self, claims: &TokenClaims) -> Result<String, AppError>;
}

/// HS256 JWT implementation of the `TokenIssuer` trait
pub struct JwtTokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl JwtTokenIssuer {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::seconds(ttl_secs as i64),
        }
    }

    /// Validate a token's signature and expiry, returning its claims
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| AppError::InvalidCredentials)
    }
}

#[async_trait]
impl TokenIssuer for JwtTokenIssuer {
    async fn issue(&self, claims: &TokenClaims) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: claims.id.clone(),
            role: claims.role,
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Token issuance failed: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issuer() -> JwtTokenIssuer {
        JwtTokenIssuer::new("test-secret", 3600)
    }

    #[tokio::test]
    async fn test_issue_and_verify() {
        let issuer = issuer();
        let token = issuer
            .issue(&TokenClaims {
                id: "account-1".to_string(),
                role: Role::Admin,
            })
            .await
            .unwrap();

        // JWT has three dot-separated parts
        assert_eq!(token.matches('.').count(), 2);

        let claims = issuer.verify(&token).unwrap();
        assert_eq!(claims.sub, "account-1");
        assert_eq!(claims.role, Role::Admin);
        assert!(claims.exp > claims.iat);
    }

    #[tokio::test]
    async fn test_verify_rejects_tampered_token() {
        let issuer = issuer();
        let token = issuer
            .issue(&TokenClaims {
                id: "account-1".to_string(),
                role: Role::Normal,
            })
            .await
            .unwrap();

        let tampered = format!("{token}x");
        assert!(matches!(
            issuer.verify(&tampered),
            Err(AppError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_verify_rejects_foreign_secret() {
        let token = issuer()
            .issue(&TokenClaims {
                id: "account-1".to_string(),
                role: Role::Normal,
            })
            .await
            .unwrap();

        let other = JwtTokenIssuer::new("another-secret", 3600);
        assert!(other.verify(&token).is_err());
    }
}

//! JWT issuance and verification

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::member::MemberClaims,
};

/// Signs HS256 tokens asserting a member's identity
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    lifetime: Duration,
}

impl TokenIssuer {
    pub fn new(secret: &str, lifetime: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            lifetime,
        }
    }

    pub fn from_config(config: &AuthConfig) -> AppResult<Self> {
        let lifetime = i64::try_from(config.jwt_expiration_hours)
            .ok()
            .and_then(Duration::try_hours)
            .ok_or_else(|| {
                AppError::Internal(format!(
                    "jwt_expiration_hours out of range: {}",
                    config.jwt_expiration_hours
                ))
            })?;
        Ok(Self::new(&config.jwt_secret, lifetime))
    }

    /// Build the claims for a member, starting now
    pub fn claims_for(&self, member_id: i32) -> MemberClaims {
        let now = Utc::now();
        MemberClaims {
            sub: member_id.to_string(),
            member_id,
            iat: now.timestamp(),
            exp: (now + self.lifetime).timestamp(),
        }
    }

    /// Create a signed token for a member
    pub fn issue(&self, member_id: i32) -> AppResult<String> {
        encode(&Header::default(), &self.claims_for(member_id), &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))
    }

    /// Check signature and expiry, returning the claims
    pub fn verify(&self, token: &str) -> AppResult<MemberClaims> {
        decode::<MemberClaims>(token, &self.decoding_key, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| AppError::Authentication(format!("Invalid token: {}", e)))
    }
}

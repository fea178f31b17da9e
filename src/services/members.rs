//! Member registration and authentication service

use crate::{
    error::{AppError, AppResult},
    models::member::{Member, RegisterMember},
    repository::Repository,
};

use super::{credentials::CredentialHasher, tokens::TokenIssuer};

/// Same message for unknown email and wrong password
const INVALID_CREDENTIALS: &str = "Invalid email or password";

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
    hasher: CredentialHasher,
    tokens: TokenIssuer,
}

impl MembersService {
    pub fn new(repository: Repository, hasher: CredentialHasher, tokens: TokenIssuer) -> Self {
        Self {
            repository,
            hasher,
            tokens,
        }
    }

    /// Register a new member with a hashed password
    pub async fn register(&self, member: RegisterMember) -> AppResult<Member> {
        if self.repository.members.email_exists(&member.email).await? {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let password_hash = self.hasher.hash_password(&member.password)?;
        let created = self
            .repository
            .members
            .create(&member.name, &member.email, &password_hash)
            .await?;

        tracing::info!("Registered member id={}", created.id);
        Ok(created)
    }

    /// Authenticate member by email and return JWT token
    pub async fn login(&self, email: &str, password: &str) -> AppResult<String> {
        let Some(member) = self.repository.members.get_by_email(email).await? else {
            tracing::warn!("Login rejected: unknown email");
            return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
        };

        if !self.hasher.verify_password(password, &member.password_hash)? {
            tracing::warn!("Login rejected: bad password for member id={}", member.id);
            return Err(AppError::Authentication(INVALID_CREDENTIALS.to_string()));
        }

        let token = self.tokens.issue(member.id)?;
        tracing::info!("Member id={} logged in", member.id);
        Ok(token)
    }

    /// Get member by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Member> {
        self.repository.members.get_by_id(id).await
    }
}

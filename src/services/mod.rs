//! Business logic services

pub mod borrows;
pub mod catalog;
pub mod credentials;
pub mod members;
pub mod tokens;

use crate::{config::AuthConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub members: members::MembersService,
    pub catalog: catalog::CatalogService,
    pub borrows: borrows::BorrowsService,
    pub tokens: tokens::TokenIssuer,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: &AuthConfig) -> AppResult<Self> {
        let tokens = tokens::TokenIssuer::from_config(auth_config)?;
        Ok(Self {
            members: members::MembersService::new(
                repository.clone(),
                credentials::CredentialHasher::new(),
                tokens.clone(),
            ),
            catalog: catalog::CatalogService::new(repository.clone()),
            borrows: borrows::BorrowsService::new(repository.clone()),
            tokens,
            repository,
        })
    }

    /// Check that the persistence layer is reachable
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}

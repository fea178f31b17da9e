//! Catalog management service

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Every book in the catalog
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Get book by ID
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Add a book; `book` must already be validated
    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        let created = self.repository.books.create(&book).await?;
        tracing::info!(
            "Catalog create: book id={} '{}' stock={}",
            created.id,
            created.title,
            created.stock
        );
        Ok(created)
    }
}

//! Repository layer for database operations
//!
//! Each entity has an async trait and a PostgreSQL implementation. The
//! [`memory::MemoryStore`] implements all of them in-process for tests and
//! the `memory` storage backend.

pub mod books;
pub mod borrows;
pub mod members;
pub mod memory;

use std::sync::Arc;

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

pub use books::BooksRepository;
pub use borrows::BorrowsRepository;
pub use members::MembersRepository;

/// Persistence gateway handed to the services
#[derive(Clone)]
pub struct Repository {
    pool: Option<Pool<Postgres>>,
    pub members: Arc<dyn MembersRepository>,
    pub books: Arc<dyn BooksRepository>,
    pub borrows: Arc<dyn BorrowsRepository>,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            members: Arc::new(members::PgMembersRepository::new(pool.clone())),
            books: Arc::new(books::PgBooksRepository::new(pool.clone())),
            borrows: Arc::new(borrows::PgBorrowsRepository::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Create a repository backed by a fresh process-local store
    pub fn in_memory() -> Self {
        let store = Arc::new(memory::MemoryStore::default());
        Self {
            pool: None,
            members: store.clone(),
            books: store.clone(),
            borrows: store,
        }
    }

    /// Assemble a repository from individual implementations
    pub fn from_parts(
        members: Arc<dyn MembersRepository>,
        books: Arc<dyn BooksRepository>,
        borrows: Arc<dyn BorrowsRepository>,
    ) -> Self {
        Self {
            pool: None,
            members,
            books,
            borrows,
        }
    }

    /// Check that the backing store answers
    pub async fn ping(&self) -> AppResult<()> {
        if let Some(ref pool) = self.pool {
            sqlx::query("SELECT 1").execute(pool).await?;
        }
        Ok(())
    }
}

/// True for a unique-constraint violation reported by the database
pub(crate) fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

//! Books repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CreateBook},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BooksRepository: Send + Sync {
    /// All books ordered by id
    async fn list(&self) -> AppResult<Vec<Book>>;

    /// Get book by ID
    async fn get_by_id(&self, id: i32) -> AppResult<Book>;

    /// Insert a new book
    async fn create(&self, book: &CreateBook) -> AppResult<Book>;
}

#[derive(Clone)]
pub struct PgBooksRepository {
    pool: Pool<Postgres>,
}

impl PgBooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BooksRepository for PgBooksRepository {
    async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, stock, created_at FROM books ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, author, stock, created_at FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        if book.stock < 0 {
            return Err(AppError::Validation("Stock cannot be negative".to_string()));
        }

        let created = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author, stock)
            VALUES ($1, $2, $3)
            RETURNING id, title, author, stock, created_at
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.stock)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }
}

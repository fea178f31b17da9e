//! Borrows repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::borrow::Borrow,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BorrowsRepository: Send + Sync {
    /// Record a borrow and take one copy out of stock, atomically.
    ///
    /// Fails with `NotFound` if the book does not exist and `OutOfStock` if
    /// its stock is zero; nothing is written in either case.
    async fn create(&self, member_id: i32, book_id: i32) -> AppResult<Borrow>;
}

#[derive(Clone)]
pub struct PgBorrowsRepository {
    pool: Pool<Postgres>,
}

impl PgBorrowsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BorrowsRepository for PgBorrowsRepository {
    async fn create(&self, member_id: i32, book_id: i32) -> AppResult<Borrow> {
        // Dropping `tx` without commit rolls everything back
        let mut tx = self.pool.begin().await?;

        // Check and decrement in one statement: concurrent borrows of the
        // last copy serialize on the row lock and only one sees stock > 0.
        let remaining: Option<i32> = sqlx::query_scalar(
            "UPDATE books SET stock = stock - 1 WHERE id = $1 AND stock > 0 RETURNING stock",
        )
        .bind(book_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(remaining) = remaining else {
            let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM books WHERE id = $1)")
                .bind(book_id)
                .fetch_one(&mut *tx)
                .await?;
            tx.rollback().await?;

            return Err(if exists {
                AppError::OutOfStock
            } else {
                AppError::NotFound("Book not found".to_string())
            });
        };

        let borrow = sqlx::query_as::<_, Borrow>(
            r#"
            INSERT INTO borrows (member_id, book_id)
            VALUES ($1, $2)
            RETURNING id, member_id, book_id, borrowed_at
            "#,
        )
        .bind(member_id)
        .bind(book_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!("Book {} stock now {}", book_id, remaining);

        Ok(borrow)
    }
}

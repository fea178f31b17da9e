//! Members repository for database operations

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::member::Member,
};

use super::is_unique_violation;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembersRepository: Send + Sync {
    /// Insert a member; `Conflict` if the email is taken
    async fn create(&self, name: &str, email: &str, password_hash: &str) -> AppResult<Member>;

    /// Get member by ID
    async fn get_by_id(&self, id: i32) -> AppResult<Member>;

    /// Get member by email, case-insensitively
    async fn get_by_email(&self, email: &str) -> AppResult<Option<Member>>;

    /// Check if email already exists
    async fn email_exists(&self, email: &str) -> AppResult<bool>;
}

#[derive(Clone)]
pub struct PgMembersRepository {
    pool: Pool<Postgres>,
}

impl PgMembersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MembersRepository for PgMembersRepository {
    async fn create(&self, name: &str, email: &str, password_hash: &str) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            r#"
            INSERT INTO members (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                AppError::Conflict("Email already registered".to_string())
            } else {
                AppError::Database(e)
            }
        })
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            "SELECT id, name, email, password_hash, created_at FROM members WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        let member = sqlx::query_as::<_, Member>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM members
            WHERE LOWER(email) = LOWER($1)
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(member)
    }

    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM members WHERE LOWER(email) = LOWER($1))")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }
}

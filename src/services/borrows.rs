//! Borrow service

use crate::{
    error::{AppError, AppResult},
    models::borrow::Borrow,
    repository::Repository,
};

#[derive(Clone)]
pub struct BorrowsService {
    repository: Repository,
}

impl BorrowsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Lend one copy of a book to a member
    pub async fn borrow_book(&self, member_id: i32, book_id: i32) -> AppResult<Borrow> {
        match self.repository.borrows.create(member_id, book_id).await {
            Ok(borrow) => {
                tracing::info!(
                    "Borrow id={}: member {} took book {}",
                    borrow.id,
                    member_id,
                    book_id
                );
                Ok(borrow)
            }
            Err(AppError::OutOfStock) => {
                tracing::warn!("Borrow refused: book {} is out of stock", book_id);
                Err(AppError::OutOfStock)
            }
            Err(e) => Err(e),
        }
    }
}

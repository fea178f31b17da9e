//! Process-local store implementing every repository trait

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::Mutex;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, CreateBook},
        borrow::Borrow,
        member::Member,
    },
};

use super::{BooksRepository, BorrowsRepository, MembersRepository};

#[derive(Default)]
struct Tables {
    members: BTreeMap<i32, Member>,
    books: BTreeMap<i32, Book>,
    borrows: BTreeMap<i32, Borrow>,
    next_member_id: i32,
    next_book_id: i32,
    next_borrow_id: i32,
}

impl Tables {
    fn next_id(counter: &mut i32) -> i32 {
        *counter += 1;
        *counter
    }
}

/// Email comparison with the same Unicode folding as PostgreSQL's `LOWER()`
fn same_email(stored: &str, candidate: &str) -> bool {
    stored.to_lowercase() == candidate.to_lowercase()
}

/// All tables behind one lock, so every operation is a transaction
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

#[async_trait]
impl MembersRepository for MemoryStore {
    async fn create(&self, name: &str, email: &str, password_hash: &str) -> AppResult<Member> {
        let mut tables = self.tables.lock().await;

        if tables
            .members
            .values()
            .any(|m| same_email(&m.email, email))
        {
            return Err(AppError::Conflict("Email already registered".to_string()));
        }

        let member = Member {
            id: Tables::next_id(&mut tables.next_member_id),
            name: name.to_string(),
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        tables.members.insert(member.id, member.clone());

        Ok(member)
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Member> {
        self.tables
            .lock()
            .await
            .members
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))
    }

    async fn get_by_email(&self, email: &str) -> AppResult<Option<Member>> {
        Ok(self
            .tables
            .lock()
            .await
            .members
            .values()
            .find(|m| same_email(&m.email, email))
            .cloned())
    }

    async fn email_exists(&self, email: &str) -> AppResult<bool> {
        Ok(MembersRepository::get_by_email(self, email).await?.is_some())
    }
}

#[async_trait]
impl BooksRepository for MemoryStore {
    async fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.tables.lock().await.books.values().cloned().collect())
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        self.tables
            .lock()
            .await
            .books
            .get(&id)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    async fn create(&self, book: &CreateBook) -> AppResult<Book> {
        if book.stock < 0 {
            return Err(AppError::Validation("Stock cannot be negative".to_string()));
        }

        let mut tables = self.tables.lock().await;
        let created = Book {
            id: Tables::next_id(&mut tables.next_book_id),
            title: book.title.clone(),
            author: book.author.clone(),
            stock: book.stock,
            created_at: Utc::now(),
        };
        tables.books.insert(created.id, created.clone());

        Ok(created)
    }
}

#[async_trait]
impl BorrowsRepository for MemoryStore {
    async fn create(&self, member_id: i32, book_id: i32) -> AppResult<Borrow> {
        let mut tables = self.tables.lock().await;

        let book = tables
            .books
            .get_mut(&book_id)
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;
        if book.stock < 1 {
            return Err(AppError::OutOfStock);
        }
        book.stock -= 1;

        let borrow = Borrow {
            id: Tables::next_id(&mut tables.next_borrow_id),
            member_id,
            book_id,
            borrowed_at: Utc::now(),
        };
        tables.borrows.insert(borrow.id, borrow.clone());

        Ok(borrow)
    }
}

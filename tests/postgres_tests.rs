//! Repository tests against a live PostgreSQL database
//!
//! Run with: DATABASE_URL=postgres://... cargo test --test postgres_tests -- --ignored

use chrono::Utc;
use sqlx::{postgres::PgPoolOptions, Pool, Postgres};

use shelfmark::{models::book::CreateBook, repository::Repository, AppError};

async fn repository() -> (Repository, Pool<Postgres>) {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = PgPoolOptions::new()
        .max_connections(8)
        .connect(&url)
        .await
        .expect("Failed to connect to database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to run database migrations");
    (Repository::new(pool.clone()), pool)
}

fn book(stock: i32) -> CreateBook {
    CreateBook {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        stock,
    }
}

async fn borrow_count(pool: &Pool<Postgres>, book_id: i32) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM borrows WHERE book_id = $1")
        .bind(book_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
#[ignore]
async fn test_duplicate_email_conflicts() {
    let (repository, _) = repository().await;
    let email = format!("member-{}@example.org", Utc::now().timestamp_nanos_opt().unwrap());

    repository.members.create("Ada", &email, "hash").await.unwrap();
    let second = repository
        .members
        .create("Ada", &email.to_uppercase(), "hash")
        .await;

    assert!(matches!(second, Err(AppError::Conflict(_))));
}

#[tokio::test]
#[ignore]
async fn test_borrow_until_out_of_stock() {
    let (repository, pool) = repository().await;
    let created = repository.books.create(&book(1)).await.unwrap();

    repository.borrows.create(1, created.id).await.unwrap();
    let second = repository.borrows.create(1, created.id).await;

    assert!(matches!(second, Err(AppError::OutOfStock)));
    assert_eq!(repository.books.get_by_id(created.id).await.unwrap().stock, 0);
    assert_eq!(borrow_count(&pool, created.id).await, 1);
}

#[tokio::test]
#[ignore]
async fn test_borrow_missing_book() {
    let (repository, _) = repository().await;
    let result = repository.borrows.create(1, i32::MAX).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
#[ignore]
async fn test_negative_stock_rejected_before_insert() {
    let (repository, _) = repository().await;
    let result = repository.books.create(&book(-1)).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
}

#[tokio::test]
#[ignore]
async fn test_stock_check_constraint() {
    let (_, pool) = repository().await;
    let result = sqlx::query("INSERT INTO books (title, author, stock) VALUES ($1, $2, $3)")
        .bind("Dune")
        .bind("Herbert")
        .bind(-1)
        .execute(&pool)
        .await;

    match result {
        Err(sqlx::Error::Database(e)) => assert!(e.is_check_violation()),
        other => panic!("expected a check violation, got {:?}", other),
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
#[ignore]
async fn test_concurrent_borrows_of_last_copy() {
    let (repository, pool) = repository().await;
    let created = repository.books.create(&book(1)).await.unwrap();

    let handles: Vec<_> = (1..=6)
        .map(|member_id| {
            let repository = repository.clone();
            let book_id = created.id;
            tokio::spawn(async move { repository.borrows.create(member_id, book_id).await })
        })
        .collect();

    let mut successes = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => successes += 1,
            Err(AppError::OutOfStock) => {}
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert_eq!(successes, 1);
    assert_eq!(repository.books.get_by_id(created.id).await.unwrap().stock, 0);
    assert_eq!(borrow_count(&pool, created.id).await, 1);
}

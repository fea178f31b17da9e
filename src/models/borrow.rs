//! Borrow (loan) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Borrow row: one member holding one copy of a book
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Borrow {
    pub id: i32,
    pub member_id: i32,
    pub book_id: i32,
    pub borrowed_at: DateTime<Utc>,
}

/// Borrow request. An id matching no book is reported as not found.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBorrow {
    pub member_id: i32,
    pub book_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_uses_camel_case() {
        let request: CreateBorrow =
            serde_json::from_value(serde_json::json!({"memberId": 1, "bookId": 7})).unwrap();
        assert_eq!(request.member_id, 1);
        assert_eq!(request.book_id, 7);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_non_positive_ids_left_to_lookup() {
        let request = CreateBorrow {
            member_id: 0,
            book_id: -3,
        };
        assert!(request.validate().is_ok());
    }
}

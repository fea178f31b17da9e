//! Borrow endpoint

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::borrow::CreateBorrow, AppState};

use super::ValidatedJson;

/// Borrow response
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BorrowResponse {
    /// Always "borrowed"
    pub status: String,
    pub borrow_id: i32,
}

/// Borrow one copy of a book
#[utoipa::path(
    post,
    path = "/borrows",
    tag = "borrows",
    request_body = CreateBorrow,
    responses(
        (status = 201, description = "Book borrowed", body = BorrowResponse),
        (status = 400, description = "Invalid input or out of stock", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn borrow_book(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateBorrow>,
) -> AppResult<(StatusCode, Json<BorrowResponse>)> {
    let borrow = state
        .services
        .borrows
        .borrow_book(request.member_id, request.book_id)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(BorrowResponse {
            status: "borrowed".to_string(),
            borrow_id: borrow.id,
        }),
    ))
}

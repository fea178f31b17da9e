//! Registration and login endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::member::{LoginRequest, MemberInfo, RegisterMember},
    AppState,
};

use super::{AuthenticatedMember, ValidatedJson};

/// Login response
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    /// Signed bearer token, valid for 24 hours by default
    pub token: String,
}

/// Register a new member
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterMember,
    responses(
        (status = 201, description = "Member registered", body = MemberInfo),
        (status = 400, description = "Invalid input", body = crate::error::ErrorResponse),
        (status = 409, description = "Email already registered", body = crate::error::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RegisterMember>,
) -> AppResult<(StatusCode, Json<MemberInfo>)> {
    let member = state.services.members.register(request).await?;
    Ok((StatusCode::CREATED, Json(member.into())))
}

/// Authenticate with email and password
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let token = state
        .services
        .members
        .login(&request.email, &request.password)
        .await?;
    Ok(Json(LoginResponse { token }))
}

/// Get the member the bearer token belongs to
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "auth",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current member", body = MemberInfo),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse)
    )
)]
pub async fn me(
    State(state): State<AppState>,
    AuthenticatedMember(claims): AuthenticatedMember,
) -> AppResult<Json<MemberInfo>> {
    let member = state.services.members.get_by_id(claims.member_id).await?;
    Ok(Json(member.into()))
}

//! Member model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Member row from database. Not serializable: it carries the password hash.
#[derive(Debug, Clone, FromRow)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

/// Public view of a member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MemberInfo {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl From<Member> for MemberInfo {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            email: member.email,
        }
    }
}

/// Registration request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct RegisterMember {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    /// Login key, unique per member
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request
///
/// No field rules: empty credentials fail authentication like any other
/// mismatch.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// JWT claims for authenticated members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberClaims {
    /// Member id as a string, per JWT convention
    pub sub: String,
    pub member_id: i32,
    pub exp: i64,
    pub iat: i64,
}

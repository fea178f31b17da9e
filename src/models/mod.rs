//! Data models for Shelfmark

pub mod book;
pub mod borrow;
pub mod member;

// Re-export commonly used types
pub use book::{Book, CreateBook};
pub use borrow::{Borrow, CreateBorrow};
pub use member::{LoginRequest, Member, MemberClaims, MemberInfo, RegisterMember};

//! Input validation applied before any store access
//!
//! Each input shape (create, update, search) enumerates its accepted
//! fields and rejects anything outside that set, returning a structured
//! [`crate::core::error::ValidationError`] rather than a generic failure.

pub mod requests;
pub mod search;
pub mod validators;

pub use requests::{CreateUserRequest, UpdateUserRequest};
pub use search::parse_search_query;

//! Core module containing the domain types, errors, and validation

pub mod error;
pub mod filter;
pub mod service;
pub mod user;
pub mod validation;

pub use error::{ApiError, StoreError, ValidationError};
pub use filter::UserFilter;
pub use service::UserService;
pub use user::{Gender, NewUser, User, UserPatch};

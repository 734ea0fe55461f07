//! # user-registry
//!
//! A minimal in-memory user management service over HTTP: create, read
//! (single/all), partial update, delete, and exact-match multi-field
//! search for a single resource type.
//!
//! ## Architecture
//!
//! - **Core** ([`core`]): the `User` entity, the typed [`core::UserFilter`]
//!   predicate, the validation layer, and the error taxonomy. All
//!   dependencies point downward; nothing here knows about HTTP beyond the
//!   status-code mapping owned by [`core::ApiError`].
//! - **Storage** ([`storage`]): [`storage::InMemoryUserStore`] behind the
//!   [`core::UserService`] trait. One lock guards the collection and the
//!   id counter; iteration follows insertion order and filtering is a
//!   linear scan.
//! - **Server** ([`server`]): the axum router and handlers, a thin adapter
//!   that maps core outcomes to responses.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use user_registry::prelude::*;
//!
//! let state = AppState { users: Arc::new(InMemoryUserStore::new()) };
//! let app = router(state);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        ApiError, Gender, NewUser, StoreError, User, UserFilter, UserPatch, UserService,
        ValidationError,
        validation::{CreateUserRequest, UpdateUserRequest, parse_search_query},
    };

    // === Storage ===
    pub use crate::storage::InMemoryUserStore;

    // === Server ===
    pub use crate::server::{AppState, router};

    // === Config ===
    pub use crate::config::ServerConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}

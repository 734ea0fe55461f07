//! Request body shapes and their validation
//!
//! Each shape enumerates its accepted fields via `deny_unknown_fields`, so
//! a payload carrying anything outside that set is rejected at
//! deserialization. Value-level constraints live in `validate()`, which
//! produces the value object the store consumes.

use serde::Deserialize;

use crate::core::error::ValidationError;
use crate::core::user::{Gender, NewUser, UserPatch};
use crate::core::validation::validators;

/// Body for `POST /users`
///
/// All three fields are required; unknown fields are rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUserRequest {
    pub username: String,
    pub age: i64,
    pub gender: Gender,
}

impl CreateUserRequest {
    /// Check value constraints and produce the store-ready value object
    pub fn validate(self) -> Result<NewUser, ValidationError> {
        validators::non_empty("username", &self.username)?;
        validators::positive("age", self.age)?;
        Ok(NewUser {
            username: self.username,
            age: self.age,
            gender: self.gender,
        })
    }
}

/// Body for `PATCH /users/{id}`
///
/// Both fields are optional; absent fields are left untouched by the
/// store. `gender` is not part of the update contract, so a payload
/// supplying it is rejected like any other unknown field. Age positivity
/// is not re-validated on update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateUserRequest {
    pub username: Option<String>,
    pub age: Option<i64>,
}

impl UpdateUserRequest {
    /// Check value constraints on the fields actually supplied
    pub fn validate(self) -> Result<UserPatch, ValidationError> {
        if let Some(username) = &self.username {
            validators::non_empty("username", username)?;
        }
        Ok(UserPatch {
            username: self.username,
            age: self.age,
        })
    }
}

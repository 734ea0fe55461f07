//! The user entity and its attribute set

use serde::{Deserialize, Serialize};

/// Gender of a user.
///
/// Closed two-value set: once input has passed validation, an invalid
/// gender cannot be represented. Set at creation, never mutated afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Parse from the wire form (`"male"` / `"female"`)
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Gender::Male),
            "female" => Some(Gender::Female),
            _ => None,
        }
    }

    /// The wire form of this value
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

/// A single user record held by the store
///
/// The `id` is assigned by the store: unique, strictly increasing from 1,
/// and never reused after deletion. `username` and `age` are mutable via
/// partial update; `gender` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub age: i64,
    pub gender: Gender,
}

/// Attributes for a user that has not been assigned an id yet
///
/// Produced by the validation layer; the store turns it into a [`User`].
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub age: i64,
    pub gender: Gender,
}

/// Partial update of a user's mutable attributes
///
/// Only `Some` fields are applied; `None` fields keep their prior values.
/// `gender` is deliberately absent: no operation mutates it post-creation.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub username: Option<String>,
    pub age: Option<i64>,
}

impl UserPatch {
    /// True when the patch carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.age.is_none()
    }
}

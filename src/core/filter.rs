//! Exact-match filtering over the user collection

use crate::core::user::{Gender, User};

/// Exact-match predicate over all three user attributes
///
/// Every field is mandatory and matched with exact equality; a user is
/// included only if all three comparisons hold (logical AND). There is no
/// substring, case-insensitive, or range matching.
#[derive(Debug, Clone, PartialEq)]
pub struct UserFilter {
    pub username: String,
    pub age: i64,
    pub gender: Gender,
}

impl UserFilter {
    /// True when `user` matches this predicate on every field
    pub fn matches(&self, user: &User) -> bool {
        user.username == self.username && user.age == self.age && user.gender == self.gender
    }
}

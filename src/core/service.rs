//! Service trait for user store operations

use crate::core::error::StoreError;
use crate::core::filter::UserFilter;
use crate::core::user::{NewUser, User, UserPatch};
use async_trait::async_trait;

/// Service trait for managing the user collection
///
/// Implementations own the collection and the id counter. The trait is
/// consumed as an `Arc<dyn UserService>` injected into handler state, so
/// tests can swap in isolated instances rather than sharing a process-wide
/// default.
///
/// Store operations never decide HTTP semantics: lookups return
/// `Option`/[`StoreError::NotFound`] and the boundary layer maps those to
/// status codes.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Create a new user, allocating the next id
    ///
    /// Always succeeds given validated input; ids are strictly increasing
    /// and never reused, even after deletion.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Get a user by id; `None` on a miss
    async fn get(&self, id: u64) -> Result<Option<User>, StoreError>;

    /// List all live users in creation (ascending-id) order
    async fn list(&self) -> Result<Vec<User>, StoreError>;

    /// Apply the supplied fields of `patch` to the user in place
    ///
    /// Fields the patch leaves as `None` keep their prior values.
    async fn update(&self, id: u64, patch: UserPatch) -> Result<User, StoreError>;

    /// Remove a user permanently; its id is retired, not reissued
    async fn delete(&self, id: u64) -> Result<(), StoreError>;

    /// All users matching `filter`, in store iteration order
    ///
    /// An empty result is a normal outcome, not an error.
    async fn filter(&self, filter: &UserFilter) -> Result<Vec<User>, StoreError>;

    /// Clear the collection and reset the id counter
    ///
    /// For test isolation; never invoked during normal operation.
    async fn reset(&self) -> Result<(), StoreError>;

    /// Insert a fixed set of well-formed users (demo/test helper)
    async fn seed(&self) -> Result<Vec<User>, StoreError>;
}

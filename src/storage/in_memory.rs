//! In-memory implementation of UserService

use crate::core::error::StoreError;
use crate::core::filter::UserFilter;
use crate::core::service::UserService;
use crate::core::user::{Gender, NewUser, User, UserPatch};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// First id handed out by a fresh (or reset) store.
const FIRST_ID: u64 = 1;

/// The collection and its id counter, guarded by one lock so that no
/// operation can observe the counter and the map out of step.
struct Inner {
    users: IndexMap<u64, User>,
    next_id: u64,
}

/// In-memory user store
///
/// Uses an `IndexMap` so iteration follows insertion order, which (ids
/// being monotonic) is also ascending-id order. All operations take the
/// lock for their full duration and never await while holding it.
#[derive(Clone)]
pub struct InMemoryUserStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryUserStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                users: IndexMap::new(),
                next_id: FIRST_ID,
            })),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner
            .read()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner
            .write()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserService for InMemoryUserStore {
    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.write()?;

        let id = inner.next_id;
        inner.next_id += 1;

        let user = User {
            id,
            username: user.username,
            age: user.age,
            gender: user.gender,
        };
        inner.users.insert(id, user.clone());

        Ok(user)
    }

    async fn get(&self, id: u64) -> Result<Option<User>, StoreError> {
        let inner = self.read()?;

        Ok(inner.users.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, StoreError> {
        let inner = self.read()?;

        Ok(inner.users.values().cloned().collect())
    }

    async fn update(&self, id: u64, patch: UserPatch) -> Result<User, StoreError> {
        let mut inner = self.write()?;

        let user = inner
            .users
            .get_mut(&id)
            .ok_or(StoreError::NotFound { id })?;

        if let Some(username) = patch.username {
            user.username = username;
        }
        if let Some(age) = patch.age {
            user.age = age;
        }

        Ok(user.clone())
    }

    async fn delete(&self, id: u64) -> Result<(), StoreError> {
        let mut inner = self.write()?;

        // shift_remove keeps the remaining entries in insertion order.
        inner
            .users
            .shift_remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound { id })
    }

    async fn filter(&self, filter: &UserFilter) -> Result<Vec<User>, StoreError> {
        let inner = self.read()?;

        Ok(inner
            .users
            .values()
            .filter(|user| filter.matches(user))
            .cloned()
            .collect())
    }

    async fn reset(&self) -> Result<(), StoreError> {
        let mut inner = self.write()?;

        inner.users.clear();
        inner.next_id = FIRST_ID;

        Ok(())
    }

    async fn seed(&self) -> Result<Vec<User>, StoreError> {
        let mut inner = self.write()?;

        let samples = [
            ("alice", 20, Gender::Female),
            ("bob", 30, Gender::Male),
            ("carol", 25, Gender::Female),
        ];

        let mut seeded = Vec::with_capacity(samples.len());
        for (username, age, gender) in samples {
            let id = inner.next_id;
            inner.next_id += 1;

            let user = User {
                id,
                username: username.to_string(),
                age,
                gender,
            };
            inner.users.insert(id, user.clone());
            seeded.push(user);
        }

        Ok(seeded)
    }
}

//! `RwLock`-guarded user store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{UserRepository, UserRepositoryError};
use crate::domain::{User, UserId, Username};

fn poisoned<T>(_: PoisonError<T>) -> UserRepositoryError {
    UserRepositoryError::lock("a writer panicked while holding the user map")
}

/// User store keyed by id.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> Result<(), UserRepositoryError> {
        let mut map = self.users.write().map_err(poisoned)?;
        map.insert(*user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        let map = self.users.read().map_err(poisoned)?;
        Ok(map.get(id).cloned())
    }

    async fn find_by_username(
        &self,
        username: &Username,
    ) -> Result<Option<User>, UserRepositoryError> {
        let map = self.users.read().map_err(poisoned)?;
        Ok(map
            .values()
            .find(|user| user.username() == username)
            .cloned())
    }
}

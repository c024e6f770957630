//! Driving port for user account management.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserId, Username};

/// Use-case port for creating and finding user accounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserAccounts: Send + Sync {
    /// Create an account with a fresh random id. Duplicate names are allowed.
    async fn create_user(&self, new_user: NewUser) -> Result<User, Error>;

    async fn get_user(&self, id: &UserId) -> Result<Option<User>, Error>;

    async fn get_user_by_username(&self, username: &Username) -> Result<Option<User>, Error>;
}

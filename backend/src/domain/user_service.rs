//! User account service over the user store.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{UserAccounts, UserRepository, UserRepositoryError};
use crate::domain::{Error, NewUser, User, UserId, Username};

fn map_repository_error(err: UserRepositoryError) -> Error {
    error!(error = %err, "user store failure");
    match err {
        UserRepositoryError::Lock { message } => {
            Error::internal(format!("user store unavailable: {message}"))
        }
    }
}

/// Implements [`UserAccounts`] on top of a [`UserRepository`].
#[derive(Clone)]
pub struct UserAccountService<R> {
    repo: Arc<R>,
}

impl<R> UserAccountService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UserAccounts for UserAccountService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, new_user: NewUser) -> Result<User, Error> {
        let user = User::new(UserId::random(), new_user);
        self.repo.insert(&user).await.map_err(map_repository_error)?;
        debug!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn get_user(&self, id: &UserId) -> Result<Option<User>, Error> {
        self.repo.find_by_id(id).await.map_err(map_repository_error)
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<Option<User>, Error> {
        self.repo
            .find_by_username(username)
            .await
            .map_err(map_repository_error)
    }
}

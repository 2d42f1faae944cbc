//! Port for back-office user records.
use async_trait::async_trait;

use crate::domain::{NewUser, RecordId, User};

use super::StoreError;

/// User collection of the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user, failing with [`StoreError::DuplicateUsername`] when the
    /// name is taken.
    async fn create_user(&self, user: NewUser) -> Result<User, StoreError>;

    /// Fetch a user by identifier.
    async fn user(&self, id: RecordId) -> Result<Option<User>, StoreError>;

    /// Fetch a user by exact username.
    async fn user_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;
}

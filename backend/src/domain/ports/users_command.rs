//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// Domain use-case port for creating, replacing and removing users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Create a user from `draft`, assigning the next identifier.
    ///
    /// Fails with [`ErrorCode::InvalidRequest`](crate::domain::ErrorCode) when
    /// the email is already registered.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Replace every field of user `id` with `draft`.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error>;

    /// Remove user `id`, returning the removed record.
    async fn delete_user(&self, id: UserId) -> Result<User, Error>;
}

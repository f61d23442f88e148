//! Driving port for read-only user queries.
//!
//! Inbound adapters (HTTP handlers) use this port to read user records and
//! aggregate statistics without touching the store directly.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId, UserStats};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every stored user in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Return the user with `id`, or a not-found error.
    async fn get_user(&self, id: UserId) -> Result<User, Error>;

    /// Compute statistics over the current users.
    async fn user_stats(&self) -> Result<UserStats, Error>;
}

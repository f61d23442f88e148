//! Failures reported by the user store.

use crate::domain::ports::define_port_error;

define_port_error! {
    /// Caller-triggered store failures. Neither is fatal nor retryable.
    pub enum UserStoreError {
        /// No record carries the requested identifier.
        NotFound { id: i64 } => "user {id} not found",
        /// Another record already holds the email address.
        DuplicateEmail { email: String } => "email {email} is already registered",
    }
}

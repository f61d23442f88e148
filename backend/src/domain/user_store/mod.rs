//! In-memory user store.
//!
//! The store owns every user record, the identifier sequence and the email
//! index. All three live in one [`UserStoreState`] behind a single
//! [`Mutex`], so each public operation is one atomic, serialisable unit:
//! concurrent creates can neither hand out the same id nor register the same
//! email twice, and readers never observe a half-applied mutation.
//!
//! The lock is only taken inside synchronous methods and is therefore never
//! held across an `.await`.

mod error;

pub use error::UserStoreError;

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{User, UserDraft, UserId, UserStats};

/// Monotonic identifier generator. Advanced only when a record is created.
#[derive(Debug)]
struct IdSequence {
    next: i64,
}

impl IdSequence {
    const FIRST: i64 = 1;

    const fn new() -> Self {
        Self { next: Self::FIRST }
    }

    fn advance(&mut self) -> UserId {
        let id = UserId::new(self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug)]
struct UserStoreState {
    /// Records in insertion order.
    users: Vec<User>,
    emails: HashMap<String, UserId>,
    sequence: IdSequence,
}

impl UserStoreState {
    fn new() -> Self {
        Self {
            users: Vec::new(),
            emails: HashMap::new(),
            sequence: IdSequence::new(),
        }
    }

    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|user| user.id() == id)
    }

    fn email_owner(&self, email: &str) -> Option<UserId> {
        self.emails.get(email).copied()
    }
}

/// Mutex-guarded owner of all user records.
///
/// Every accessor returns owned clones; nothing outside the store can reach
/// the stored records.
///
/// # Examples
/// ```
/// use backend_api::domain::{UserDraft, UserId, UserStore};
///
/// let store = UserStore::new();
/// let alice = store
///     .create(UserDraft::new("Alice", "alice@x.com", 22))
///     .expect("first create succeeds");
/// assert_eq!(alice.id(), UserId::new(1));
/// assert!(store.create(UserDraft::new("X", "alice@x.com", 30)).is_err());
/// assert_eq!(store.list().len(), 1);
/// ```
#[derive(Debug)]
pub struct UserStore {
    state: Mutex<UserStoreState>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Create an empty store whose first identifier is 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Mutex::new(UserStoreState::new()),
        }
    }

    // Mutations validate before writing, so a panic elsewhere can never leave
    // partially applied state behind; recovering the guard is sound.
    fn lock(&self) -> MutexGuard<'_, UserStoreState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All current records in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<User> {
        self.lock().users.clone()
    }

    /// Number of current records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().users.len()
    }

    /// Whether the store holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().users.is_empty()
    }

    /// The record with `id`.
    ///
    /// # Errors
    /// [`UserStoreError::NotFound`] when no record has `id`.
    pub fn get(&self, id: UserId) -> Result<User, UserStoreError> {
        let state = self.lock();
        state
            .position(id)
            .and_then(|index| state.users.get(index))
            .cloned()
            .ok_or_else(|| UserStoreError::not_found(id.get()))
    }

    /// Append a new record built from `draft`.
    ///
    /// # Errors
    /// [`UserStoreError::DuplicateEmail`] when any record already holds the
    /// email. The sequence does not advance on failure.
    pub fn create(&self, draft: UserDraft) -> Result<User, UserStoreError> {
        let mut state = self.lock();
        if state.email_owner(&draft.email).is_some() {
            return Err(UserStoreError::duplicate_email(draft.email));
        }

        let id = state.sequence.advance();
        let user = User::from_draft(id, draft);
        state.emails.insert(user.email().to_owned(), id);
        state.users.push(user.clone());
        Ok(user)
    }

    /// Replace name, email and age of record `id`, keeping its id and
    /// position.
    ///
    /// # Errors
    /// [`UserStoreError::NotFound`] when no record has `id`;
    /// [`UserStoreError::DuplicateEmail`] when a different record holds the
    /// email.
    pub fn update(&self, id: UserId, draft: UserDraft) -> Result<User, UserStoreError> {
        let mut state = self.lock();
        let index = state
            .position(id)
            .ok_or_else(|| UserStoreError::not_found(id.get()))?;
        if state.email_owner(&draft.email).is_some_and(|owner| owner != id) {
            return Err(UserStoreError::duplicate_email(draft.email));
        }

        let UserStoreState { users, emails, .. } = &mut *state;
        let user = users
            .get_mut(index)
            .ok_or_else(|| UserStoreError::not_found(id.get()))?;
        if user.email() != draft.email {
            emails.remove(user.email());
            emails.insert(draft.email.clone(), id);
        }
        user.replace(draft);
        Ok(user.clone())
    }

    /// Remove record `id` and return it.
    ///
    /// # Errors
    /// [`UserStoreError::NotFound`] when no record has `id`.
    pub fn delete(&self, id: UserId) -> Result<User, UserStoreError> {
        let mut state = self.lock();
        let index = state
            .position(id)
            .ok_or_else(|| UserStoreError::not_found(id.get()))?;
        let removed = state.users.remove(index);
        state.emails.remove(removed.email());
        Ok(removed)
    }

    /// Statistics over one consistent snapshot of the records.
    #[must_use]
    pub fn stats(&self) -> UserStats {
        UserStats::from_users(&self.lock().users)
    }
}

#[cfg(test)]
mod tests;

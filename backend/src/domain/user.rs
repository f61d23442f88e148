//! User record types.
//!
//! A [`User`] is only ever minted by the [`UserStore`](super::UserStore):
//! callers describe the fields they want with a [`UserDraft`] and receive an
//! owned copy of the stored record back.

use std::fmt;

/// Store-assigned user identifier.
///
/// Identifiers start at 1, increase by one per successful creation and are
/// never reused within the lifetime of a store. The type is signed so that any
/// integer a caller sends can be looked up; ids below 1 are simply never held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier, typically one parsed from a request path.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Caller-supplied user fields for creation and full replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub email: String,
    pub age: i64,
}

impl UserDraft {
    /// Convenience constructor used by adapters and tests.
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i64) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }
}

/// A stored user record.
///
/// ## Invariants
/// - `id` never changes after the store assigns it.
/// - No two records held by one store share an `email`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    age: i64,
}

impl User {
    pub(crate) fn from_draft(id: UserId, draft: UserDraft) -> Self {
        let UserDraft { name, email, age } = draft;
        Self {
            id,
            name,
            email,
            age,
        }
    }

    /// Replace every mutable field, keeping the identifier.
    pub(crate) fn replace(&mut self, draft: UserDraft) {
        let UserDraft { name, email, age } = draft;
        self.name = name;
        self.email = email;
        self.age = age;
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email address, unique within the store.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Age in whole years. Any integer is accepted; no range is enforced.
    #[must_use]
    pub fn age(&self) -> i64 {
        self.age
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn replace_keeps_identifier() {
        let mut user = User::from_draft(UserId::new(7), UserDraft::new("Bob", "bob@x.com", 35));
        user.replace(UserDraft::new("Bobby", "bobby@x.com", 36));

        assert_eq!(user.id(), UserId::new(7));
        assert_eq!(user.name(), "Bobby");
        assert_eq!(user.email(), "bobby@x.com");
        assert_eq!(user.age(), 36);
    }

    #[rstest]
    fn user_id_displays_raw_value() {
        assert_eq!(UserId::from(42).to_string(), "42");
    }
}

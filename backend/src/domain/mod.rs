//! Domain primitives, the in-memory user store, and the services built on it.
//!
//! Purpose: Define strongly typed domain entities used by the API layer and
//! keep every consistency rule for user records (id assignment, email
//! uniqueness, lifecycle) inside this module. Inbound adapters only ever see
//! clones of stored records.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — transport agnostic failure payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - User, UserId, UserDraft — user record types.
//! - UserStore — mutex-guarded owner of all records and the id sequence.
//! - UserStats, AgeGroupCounts — aggregate reporting over the store.
//! - UsersService — implementation of the driving ports.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_stats;
pub mod user_store;
pub mod users_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::TraceId;
pub use self::user::{User, UserDraft, UserId};
pub use self::user_stats::{AgeBracket, AgeGroupCounts, UserStats};
pub use self::user_store::UserStore;
pub use self::users_service::UsersService;

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";

//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`UsersQuery`], [`UsersCommand`]) are what inbound adapters
//! call; driven ports ([`UserOperationMetrics`]) are implemented by outbound
//! adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod user_operation_metrics;
mod users_command;
mod users_query;

#[cfg(test)]
pub use user_operation_metrics::MockUserOperationMetrics;
pub use user_operation_metrics::{
    NoOpUserOperationMetrics, OperationOutcome, UserOperation, UserOperationMetrics,
    UserOperationMetricsError,
};
#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;

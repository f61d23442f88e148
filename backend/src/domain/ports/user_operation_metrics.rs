//! Domain port surface for recording user store invocations.
//!
//! This port enables observability of store operations without coupling the
//! domain to a specific metrics backend. Implementations may export to
//! Prometheus or discard metrics entirely.

use std::fmt;

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors exposed when recording user operation metrics.
    pub enum UserOperationMetricsError {
        /// Metric exporter rejected the write.
        Export { message: String } => "user operation metrics exporter failed: {message}",
    }
}

/// Store operation being recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserOperation {
    List,
    Get,
    Create,
    Update,
    Delete,
    Stats,
}

impl UserOperation {
    /// Metric label value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Stats => "stats",
        }
    }
}

impl fmt::Display for UserOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result category of a store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationOutcome {
    Ok,
    NotFound,
    Conflict,
}

impl OperationOutcome {
    /// Metric label value.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
        }
    }
}

impl fmt::Display for OperationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metrics recording port for user store operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserOperationMetrics: Send + Sync {
    /// Count one invocation of `operation` ending in `outcome`.
    async fn record_operation(
        &self,
        operation: UserOperation,
        outcome: OperationOutcome,
    ) -> Result<(), UserOperationMetricsError>;

    /// Shift the stored-user count by `delta` (`+1` per create, `-1` per
    /// delete). Deltas commute, so concurrent mutations reported in any order
    /// still converge on the store's record count.
    async fn adjust_user_count(&self, delta: i64) -> Result<(), UserOperationMetricsError>;
}

/// No-op implementation for when metrics are disabled or in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpUserOperationMetrics;

#[async_trait]
impl UserOperationMetrics for NoOpUserOperationMetrics {
    async fn record_operation(
        &self,
        _operation: UserOperation,
        _outcome: OperationOutcome,
    ) -> Result<(), UserOperationMetricsError> {
        Ok(())
    }

    async fn adjust_user_count(&self, _delta: i64) -> Result<(), UserOperationMetricsError> {
        Ok(())
    }
}

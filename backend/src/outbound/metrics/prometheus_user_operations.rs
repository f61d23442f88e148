//! Prometheus adapter for user store metrics.
//!
//! Metrics are registered with a provided registry, normally the one owned by
//! the `actix-web-prom` middleware, so they are exposed via `/metrics`.

use async_trait::async_trait;
use prometheus::{CounterVec, IntGauge, Opts, Registry};

use crate::domain::ports::{
    OperationOutcome, UserOperation, UserOperationMetrics, UserOperationMetricsError,
};

/// Prometheus-backed user operation recorder.
///
/// # Metric Specification
///
/// - **Name**: `backend_api_user_operations_total`
///   - **Type**: Counter
///   - **Labels**: `operation` (`list`, `get`, `create`, `update`, `delete`,
///     `stats`) and `outcome` (`ok`, `not_found`, `conflict`)
/// - **Name**: `backend_api_users`
///   - **Type**: Gauge, number of users currently stored
pub struct PrometheusUserOperationMetrics {
    operations_total: CounterVec,
    users: IntGauge,
}

impl PrometheusUserOperationMetrics {
    /// Create and register metrics with the given registry.
    ///
    /// # Errors
    ///
    /// Returns an error if a metric cannot be registered (e.g., if a metric
    /// with the same name already exists in the registry).
    pub fn new(registry: &Registry) -> Result<Self, prometheus::Error> {
        let operations_total = CounterVec::new(
            Opts::new(
                "backend_api_user_operations_total",
                "Total user store operations by operation and outcome",
            ),
            &["operation", "outcome"],
        )?;
        let users = IntGauge::new("backend_api_users", "Number of users currently stored")?;
        registry.register(Box::new(operations_total.clone()))?;
        registry.register(Box::new(users.clone()))?;
        Ok(Self {
            operations_total,
            users,
        })
    }
}

#[async_trait]
impl UserOperationMetrics for PrometheusUserOperationMetrics {
    async fn record_operation(
        &self,
        operation: UserOperation,
        outcome: OperationOutcome,
    ) -> Result<(), UserOperationMetricsError> {
        self.operations_total
            .with_label_values(&[operation.as_str(), outcome.as_str()])
            .inc();
        Ok(())
    }

    async fn adjust_user_count(&self, delta: i64) -> Result<(), UserOperationMetricsError> {
        self.users.add(delta);
        Ok(())
    }
}

//! Outbound adapters for metrics exporting.
//!
//! This module provides Prometheus-backed implementations of domain metrics
//! ports. All adapters here are feature-gated behind the `metrics` feature.

mod prometheus_user_operations;

pub use prometheus_user_operations::PrometheusUserOperationMetrics;

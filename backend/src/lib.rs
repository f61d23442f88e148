//! In-memory users service.
//!
//! The [`domain`] owns user records and every consistency rule around them,
//! [`inbound::http`] exposes them as a REST API and [`outbound`] exports
//! operational metrics. The binary in `main.rs` wires these together.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;

//! Destinate backend library.
//!
//! The crate is a small hexagonal service: [`domain`] owns the entities,
//! ports and services, [`inbound`] adapts HTTP requests onto the driving
//! ports, and [`outbound`] provides the in-memory and static adapters behind
//! the driven ports.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;

//! Directory backend library modules.
//!
//! Hexagonal layout: [`domain`] holds the model and use-cases, [`inbound`]
//! the HTTP adapter, [`outbound`] the storage adapters.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;

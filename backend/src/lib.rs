//! Backend library: sample resource API and recommendation payloads.
//!
//! Layout follows a ports-and-adapters split:
//! - `domain`: entities, errors, trace ids, and ports.
//! - `inbound::http`: actix-web handlers and DTOs.
//! - `outbound`: port implementations.
//! - `middleware`: request tracing.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;

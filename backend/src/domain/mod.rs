//! Domain primitives, entities, and ports.
//!
//! Types here know nothing about HTTP. Inbound adapters translate requests
//! into these types and map [`Error`] back into transport responses.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - TraceId: request-scoped correlation identifier.
//! - Sample and its validated components.
//! - Recommendation projections.
//! - ports: traits implemented by outbound adapters.

pub mod error;
pub mod ports;
pub mod recommendation;
pub mod sample;
pub mod trace_id;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::recommendation::{
    RecommendedRestaurant, RestaurantRecommendationRequestId, RestaurantRecommendationResult,
};
pub use self::sample::{
    EmailAddress, Sample, SampleDraft, SampleId, SampleName, SampleValidationError,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

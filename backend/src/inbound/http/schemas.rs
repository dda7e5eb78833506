//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic and do not derive `ToSchema`. The
//! wrappers here mirror their wire shape and register under the domain names.

use serde::Serialize;
use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// The requested resource does not exist.
    NotFound,
    /// Any other failure.
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Error payload with a machine-readable code and the failure message under
/// the `error` key.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(as = Error)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    pub code: ErrorCodeSchema,
    /// Failure message.
    #[serde(rename = "error")]
    #[schema(example = "email must be a valid email address")]
    pub message: String,
    /// Correlation identifier matching the `trace-id` response header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub trace_id: Option<String>,
    /// Field-level context for validation failures.
    #[schema(example = json!({"field": "email", "code": "invalid_email"}))]
    pub details: Option<serde_json::Value>,
}

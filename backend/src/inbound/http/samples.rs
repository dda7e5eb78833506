//! Sample resource HTTP handlers.
//!
//! ```text
//! GET /samples
//! GET /samples/{id}
//! POST /samples {"name":"Alice","email":"a@x.com"}
//! PUT /samples/{id} {"name":"Alice","email":"a@x.com"}
//! DELETE /samples/{id}
//! ```
//!
//! Each handler rejects malformed or invalid input with 400 before touching
//! the storage port, then makes exactly one port call.

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Sample, SampleDraft, SampleId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::sample_validation_error;

/// Request body for `POST /samples`.
///
/// Absent fields deserialise as empty strings so they are reported by field
/// validation rather than as a parse failure.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSampleRequest {
    #[serde(default)]
    #[schema(example = "Alice")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "a@x.com")]
    pub email: String,
}

/// Request body for `PUT /samples/{id}`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSampleRequest {
    #[serde(default)]
    #[schema(example = "Alice")]
    pub name: String,
    #[serde(default)]
    #[schema(example = "a@x.com")]
    pub email: String,
}

impl TryFrom<CreateSampleRequest> for SampleDraft {
    type Error = Error;

    fn try_from(value: CreateSampleRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(value.name, value.email).map_err(sample_validation_error)
    }
}

impl TryFrom<UpdateSampleRequest> for SampleDraft {
    type Error = Error;

    fn try_from(value: UpdateSampleRequest) -> Result<Self, Self::Error> {
        Self::try_from_parts(value.name, value.email).map_err(sample_validation_error)
    }
}

/// Sample as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SampleBody {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "Alice")]
    pub name: String,
    #[schema(example = "a@x.com")]
    pub email: String,
}

impl From<Sample> for SampleBody {
    fn from(value: Sample) -> Self {
        Self {
            id: value.id().as_ref().to_owned(),
            name: value.name().as_ref().to_owned(),
            email: value.email().as_ref().to_owned(),
        }
    }
}

/// Response body for `GET /samples`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct ListSamplesResponse {
    pub samples: Vec<SampleBody>,
}

/// Response body for `GET /samples/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct GetSampleResponse {
    pub sample: SampleBody,
}

/// Response body for `POST /samples`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct CreateSampleResponse {
    pub sample: SampleBody,
}

/// Response body for `PUT /samples/{id}`.
#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct UpdateSampleResponse {
    pub sample: SampleBody,
}

/// Response body for `DELETE /samples/{id}`; always `{}`.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct DeleteSampleResponse {}

#[derive(Debug, Deserialize)]
struct SamplePath {
    id: String,
}

fn parse_sample_id(path: web::Path<SamplePath>) -> Result<SampleId, Error> {
    SampleId::new(path.into_inner().id).map_err(sample_validation_error)
}

/// List every sample in storage order.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::samples::list_samples;
///
/// let _app = App::new().service(list_samples);
/// ```
#[utoipa::path(
    get,
    path = "/samples",
    responses(
        (status = 200, description = "Samples", body = ListSamplesResponse),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["samples"],
    operation_id = "listSamples"
)]
#[get("/samples")]
pub async fn list_samples(state: web::Data<HttpState>) -> ApiResult<web::Json<ListSamplesResponse>> {
    let samples = state.samples.find_all().await?;
    Ok(web::Json(ListSamplesResponse {
        samples: samples.into_iter().map(SampleBody::from).collect(),
    }))
}

/// Fetch one sample.
#[utoipa::path(
    get,
    path = "/samples/{id}",
    params(("id" = String, Path, description = "Sample identifier")),
    responses(
        (status = 200, description = "Sample", body = GetSampleResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["samples"],
    operation_id = "getSample"
)]
#[get("/samples/{id}")]
pub async fn get_sample(
    state: web::Data<HttpState>,
    path: web::Path<SamplePath>,
) -> ApiResult<web::Json<GetSampleResponse>> {
    let id = parse_sample_id(path)?;
    let sample = state.samples.find_one(&id).await?;
    Ok(web::Json(GetSampleResponse {
        sample: sample.into(),
    }))
}

/// Create a sample; the identifier is assigned by storage.
#[utoipa::path(
    post,
    path = "/samples",
    request_body = CreateSampleRequest,
    responses(
        (status = 200, description = "Sample created", body = CreateSampleResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["samples"],
    operation_id = "createSample"
)]
#[post("/samples")]
pub async fn create_sample(
    state: web::Data<HttpState>,
    payload: web::Json<CreateSampleRequest>,
) -> ApiResult<web::Json<CreateSampleResponse>> {
    let draft = SampleDraft::try_from(payload.into_inner())?;
    let sample = state.samples.create(draft).await?;
    Ok(web::Json(CreateSampleResponse {
        sample: sample.into(),
    }))
}

/// Replace the name and email of an existing sample.
#[utoipa::path(
    put,
    path = "/samples/{id}",
    params(("id" = String, Path, description = "Sample identifier")),
    request_body = UpdateSampleRequest,
    responses(
        (status = 200, description = "Sample updated", body = UpdateSampleResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["samples"],
    operation_id = "updateSample"
)]
#[put("/samples/{id}")]
pub async fn update_sample(
    state: web::Data<HttpState>,
    path: web::Path<SamplePath>,
    payload: web::Json<UpdateSampleRequest>,
) -> ApiResult<web::Json<UpdateSampleResponse>> {
    let id = parse_sample_id(path)?;
    let sample = SampleDraft::try_from(payload.into_inner())?.with_id(id);
    let updated = state.samples.update(sample).await?;
    Ok(web::Json(UpdateSampleResponse {
        sample: updated.into(),
    }))
}

/// Delete a sample.
#[utoipa::path(
    delete,
    path = "/samples/{id}",
    params(("id" = String, Path, description = "Sample identifier")),
    responses(
        (status = 200, description = "Sample deleted", body = DeleteSampleResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["samples"],
    operation_id = "deleteSample"
)]
#[delete("/samples/{id}")]
pub async fn delete_sample(
    state: web::Data<HttpState>,
    path: web::Path<SamplePath>,
) -> ApiResult<web::Json<DeleteSampleResponse>> {
    let id = parse_sample_id(path)?;
    state.samples.delete(&id).await?;
    Ok(web::Json(DeleteSampleResponse {}))
}

#[cfg(test)]
#[path = "samples_tests.rs"]
mod tests;

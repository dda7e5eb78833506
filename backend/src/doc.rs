//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the sample endpoints, the health probes, the error
//! payload, and the recommendation response shapes. Swagger UI serves it in
//! debug builds and `cargo run --bin openapi-dump` prints it.

use utoipa::OpenApi;

use crate::inbound::http::recommendations::{
    GetRestaurantRecommendationResponse, ListRecommendedRestaurantsResponse,
    RecommendedRestaurantBody, RequestRestaurantRecommendationResponse,
    RestaurantRecommendationResultBody, SelectRestaurantRecommendationsResponse,
};
use crate::inbound::http::samples::{
    CreateSampleRequest, CreateSampleResponse, DeleteSampleResponse, GetSampleResponse,
    ListSamplesResponse, SampleBody, UpdateSampleRequest, UpdateSampleResponse,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "LKVK backend API",
        description = "Sample resource CRUD, recommendation payloads, and health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::samples::list_samples,
        crate::inbound::http::samples::get_sample,
        crate::inbound::http::samples::create_sample,
        crate::inbound::http::samples::update_sample,
        crate::inbound::http::samples::delete_sample,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        SampleBody,
        CreateSampleRequest,
        UpdateSampleRequest,
        ListSamplesResponse,
        GetSampleResponse,
        CreateSampleResponse,
        UpdateSampleResponse,
        DeleteSampleResponse,
        RecommendedRestaurantBody,
        RestaurantRecommendationResultBody,
        RequestRestaurantRecommendationResponse,
        ListRecommendedRestaurantsResponse,
        SelectRestaurantRecommendationsResponse,
        GetRestaurantRecommendationResponse,
    )),
    tags(
        (name = "samples", description = "Sample resource CRUD"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

//! End-to-end tests for the `/samples` endpoints over the in-memory store.

use std::sync::Arc;

use actix_http::Request;
use actix_web::{
    App,
    body::BoxBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test::{self, TestRequest},
    web,
};
use backend::Trace;
use backend::domain::TRACE_ID_HEADER;
use backend::inbound::http::error::json_config;
use backend::inbound::http::samples::{
    create_sample, delete_sample, get_sample, list_samples, update_sample,
};
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemorySampleRepository;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

#[fixture]
fn repo() -> Arc<InMemorySampleRepository> {
    Arc::new(InMemorySampleRepository::new())
}

async fn init_app(
    repo: Arc<InMemorySampleRepository>,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::new(repo)))
            .app_data(json_config())
            .wrap(Trace)
            .service(list_samples)
            .service(get_sample)
            .service(create_sample)
            .service(update_sample)
            .service(delete_sample),
    )
    .await
}

async fn send(
    app: &impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
    request: TestRequest,
) -> (StatusCode, Value) {
    let response = test::call_service(app, request.to_request()).await;
    let status = response.status();
    let body = test::read_body(response).await;
    (
        status,
        serde_json::from_slice(&body).expect("response body is JSON"),
    )
}

fn create(name: &str, email: &str) -> TestRequest {
    TestRequest::post()
        .uri("/samples")
        .set_json(json!({"name": name, "email": email}))
}

#[rstest]
#[actix_web::test]
async fn sample_lifecycle(repo: Arc<InMemorySampleRepository>) {
    let app = init_app(repo).await;

    let (status, created) = send(&app, create("Alice", "a@x.com")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["sample"]["name"], "Alice");
    assert_eq!(created["sample"]["email"], "a@x.com");
    let id = created["sample"]["id"]
        .as_str()
        .expect("id is a string")
        .to_owned();
    assert!(!id.is_empty());

    let (status, fetched) = send(&app, TestRequest::get().uri(&format!("/samples/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let update = TestRequest::put()
        .uri(&format!("/samples/{id}"))
        .set_json(json!({"name": "Alicia", "email": "alicia@x.com"}));
    let (status, updated) = send(&app, update).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        updated,
        json!({"sample": {"id": id, "name": "Alicia", "email": "alicia@x.com"}})
    );

    let (status, deleted) =
        send(&app, TestRequest::delete().uri(&format!("/samples/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted, json!({}));

    let (status, _) = send(&app, TestRequest::get().uri(&format!("/samples/{id}"))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[rstest]
#[actix_web::test]
async fn listing_follows_insertion_order(repo: Arc<InMemorySampleRepository>) {
    let app = init_app(repo).await;
    send(&app, create("Zed", "z@x.com")).await;
    send(&app, create("Amy", "a@x.com")).await;

    let (status, body) = send(&app, TestRequest::get().uri("/samples")).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = body["samples"]
        .as_array()
        .expect("samples array")
        .iter()
        .filter_map(|sample| sample["name"].as_str())
        .collect();
    assert_eq!(names, ["Zed", "Amy"]);
}

#[rstest]
#[case(TestRequest::get())]
#[case(TestRequest::delete())]
#[case(TestRequest::put().set_json(json!({"name": "Alice", "email": "a@x.com"})))]
#[actix_web::test]
async fn unknown_ids_are_not_found(
    repo: Arc<InMemorySampleRepository>,
    #[case] request: TestRequest,
) {
    let app = init_app(repo).await;

    let (status, body) = send(&app, request.uri("/samples/does-not-exist")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "not_found");
}

#[rstest]
#[actix_web::test]
async fn invalid_update_leaves_the_store_untouched(repo: Arc<InMemorySampleRepository>) {
    let app = init_app(repo.clone()).await;
    let (_, created) = send(&app, create("Alice", "a@x.com")).await;
    let id = created["sample"]["id"].as_str().expect("id").to_owned();

    let update = TestRequest::put()
        .uri(&format!("/samples/{id}"))
        .set_json(json!({"name": "Alice", "email": "broken"}));
    let (status, body) = send(&app, update).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("error").is_some());
    let (_, fetched) = send(&app, TestRequest::get().uri(&format!("/samples/{id}"))).await;
    assert_eq!(fetched["sample"]["email"], "a@x.com");
}

#[rstest]
#[actix_web::test]
async fn error_bodies_echo_the_trace_header(repo: Arc<InMemorySampleRepository>) {
    let app = init_app(repo).await;

    let response = test::call_service(
        &app,
        TestRequest::get().uri("/samples/missing").to_request(),
    )
    .await;
    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned)
        .expect("trace header present");
    let body: Value = test::read_body_json(response).await;

    assert_eq!(body["traceId"], header.as_str());
}

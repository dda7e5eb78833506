//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::{App, HttpResponse, test as actix_test};
use rstest::{fixture, rstest};
use serde::Deserialize;
use serde_json::{Value, json};

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";

#[fixture]
fn expected_trace_id() -> String {
    TRACE_ID.to_owned()
}

#[rstest]
#[case(Error::invalid_request("bad"), StatusCode::BAD_REQUEST)]
#[case(Error::not_found("missing"), StatusCode::NOT_FOUND)]
#[case(Error::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] err: Error, #[case] status: StatusCode) {
    assert_eq!(ResponseError::status_code(&err), status);
}

async fn error_payload(error: Error, expected_trace_id: Option<&str>) -> (StatusCode, Value) {
    let response = ResponseError::error_response(&error);
    let status = response.status();

    let header = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("trace id is ASCII").to_owned());
    assert_eq!(header.as_deref(), expected_trace_id);

    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body is JSON");
    (status, body)
}

#[rstest]
#[actix_web::test]
async fn internal_errors_keep_their_message(expected_trace_id: String) {
    let error = Error::internal("sample repository query failed: boom")
        .with_trace_id(expected_trace_id.clone());

    let (status, body) = error_payload(error, Some(&expected_trace_id)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({
            "code": "internal_error",
            "error": "sample repository query failed: boom",
            "traceId": TRACE_ID,
        })
    );
}

#[rstest]
#[actix_web::test]
async fn validation_errors_carry_details(expected_trace_id: String) {
    let error = Error::invalid_request("bad")
        .with_trace_id(expected_trace_id.clone())
        .with_details(json!({"field": "name"}));

    let (status, body) = error_payload(error, Some(&expected_trace_id)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad");
    assert_eq!(body["details"], json!({"field": "name"}));
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_trace_header() {
    let (status, body) = error_payload(Error::not_found("gone"), None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.get("traceId").is_none());
}

#[derive(Deserialize)]
struct Payload {
    #[expect(dead_code, reason = "field only drives deserialisation")]
    name: String,
}

#[rstest]
#[case::not_json("{not json")]
#[case::wrong_type(r#"{"name": 7}"#)]
#[actix_web::test]
async fn malformed_bodies_become_invalid_request(#[case] body: &'static str) {
    let app = actix_test::init_service(App::new().app_data(json_config()).route(
        "/",
        web::post().to(|_: web::Json<Payload>| async { HttpResponse::Ok().finish() }),
    ))
    .await;

    let request = actix_test::TestRequest::post()
        .uri("/")
        .insert_header(("content-type", "application/json"))
        .set_payload(body)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let value: Value = actix_test::read_body_json(response).await;
    assert_eq!(value["code"], "invalid_request");
    let message = value["error"].as_str().expect("error message present");
    assert!(!message.is_empty());
}

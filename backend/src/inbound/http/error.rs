//! HTTP adapter mapping for domain errors.
//!
//! Keeps [`Error`] free of actix types while letting handlers return it
//! directly. The status comes from the error code; the body is the error
//! itself, message included.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use tracing::warn;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

pub(crate) fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(self)
    }
}

fn reject_payload(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    warn!(
        method = %req.method(),
        path = %req.path(),
        error = %err,
        "rejected malformed JSON body"
    );
    Error::invalid_request(err.to_string()).into()
}

/// JSON extractor configuration shared by every handler taking a body.
///
/// Parse failures become `invalid_request` errors carrying the parser's text
/// so clients see the same error shape as validation failures.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use backend::inbound::http::error::json_config;
///
/// let _app = App::new().app_data(json_config());
/// ```
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(reject_payload)
}

#[cfg(test)]
mod tests;

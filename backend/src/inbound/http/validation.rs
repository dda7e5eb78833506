//! Validation helpers shared by inbound HTTP adapters.
//!
//! Every rejected field produces an `invalid_request` error whose details name
//! the field and a stable machine-readable code.

use serde_json::json;

use crate::domain::{Error, SampleValidationError};

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const ID: FieldName = FieldName::new("id");
pub(crate) const NAME: FieldName = FieldName::new("name");
pub(crate) const EMAIL: FieldName = FieldName::new("email");

fn field_error(field: FieldName, message: String, code: &'static str) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code,
    }))
}

fn field_and_code(err: &SampleValidationError) -> (FieldName, &'static str) {
    match err {
        SampleValidationError::EmptyId => (ID, "empty_id"),
        SampleValidationError::EmptyName => (NAME, "empty_name"),
        SampleValidationError::NameTooLong { .. } => (NAME, "name_too_long"),
        SampleValidationError::EmptyEmail => (EMAIL, "empty_email"),
        SampleValidationError::EmailTooLong { .. } => (EMAIL, "email_too_long"),
        SampleValidationError::InvalidEmail => (EMAIL, "invalid_email"),
    }
}

/// Translate a domain validation failure into a 400 error with field details.
pub(crate) fn sample_validation_error(err: SampleValidationError) -> Error {
    let (field, code) = field_and_code(&err);
    field_error(field, err.to_string(), code)
}

//! Tests for the sample domain model.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("Alice", "a@x.com")]
#[case("  Bob  ", "bob.smith+tag@example.co.uk")]
fn draft_accepts_valid_input_verbatim(#[case] name: &str, #[case] email: &str) {
    let draft = SampleDraft::try_from_parts(name, email).expect("valid draft");
    assert_eq!(draft.name().as_ref(), name);
    assert_eq!(draft.email().as_ref(), email);
}

#[rstest]
#[case("", "a@x.com", SampleValidationError::EmptyName)]
#[case("   ", "a@x.com", SampleValidationError::EmptyName)]
#[case("Alice", "", SampleValidationError::EmptyEmail)]
#[case("Alice", "not-an-email", SampleValidationError::InvalidEmail)]
#[case("Alice", "a@x", SampleValidationError::InvalidEmail)]
#[case("Alice", "a b@x.com", SampleValidationError::InvalidEmail)]
#[case("Alice", "a@@x.com", SampleValidationError::InvalidEmail)]
fn draft_rejects_invalid_input(
    #[case] name: &str,
    #[case] email: &str,
    #[case] expected: SampleValidationError,
) {
    let err = SampleDraft::try_from_parts(name, email).expect_err("invalid draft");
    assert_eq!(err, expected);
}

#[rstest]
fn name_is_checked_before_email() {
    let err = SampleDraft::try_from_parts("", "nope").expect_err("invalid draft");
    assert_eq!(err, SampleValidationError::EmptyName);
}

#[rstest]
fn name_length_is_bounded() {
    let at_limit = "n".repeat(SAMPLE_NAME_MAX);
    assert!(SampleName::new(at_limit).is_ok());

    let over_limit = "n".repeat(SAMPLE_NAME_MAX + 1);
    assert_eq!(
        SampleName::new(over_limit),
        Err(SampleValidationError::NameTooLong {
            max: SAMPLE_NAME_MAX
        })
    );
}

#[rstest]
fn email_length_is_bounded() {
    let local = "a".repeat(EMAIL_MAX);
    let email = format!("{local}@x.com");
    assert_eq!(
        EmailAddress::new(email),
        Err(SampleValidationError::EmailTooLong { max: EMAIL_MAX })
    );
}

#[rstest]
#[case("")]
#[case("   ")]
fn sample_id_rejects_blank_values(#[case] raw: &str) {
    assert_eq!(SampleId::new(raw), Err(SampleValidationError::EmptyId));
}

#[rstest]
#[case("42")]
#[case("3fa85f64-5717-4562-b3fc-2c963f66afa6")]
fn sample_id_accepts_any_non_blank_value(#[case] raw: &str) {
    let id = SampleId::new(raw).expect("valid id");
    assert_eq!(id.to_string(), raw);
}

#[rstest]
fn sample_serializes_as_flat_strings() {
    let sample = SampleDraft::try_from_parts("Alice", "a@x.com")
        .expect("valid draft")
        .with_id(SampleId::new("42").expect("valid id"));

    let value = serde_json::to_value(&sample).expect("serialize sample");
    assert_eq!(
        value,
        json!({ "id": "42", "name": "Alice", "email": "a@x.com" })
    );
}

#[rstest]
fn sample_deserialization_enforces_invariants() {
    let result = serde_json::from_value::<Sample>(json!({
        "id": "42",
        "name": "Alice",
        "email": "broken",
    }));
    assert!(result.is_err());
}

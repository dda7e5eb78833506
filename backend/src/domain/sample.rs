//! Sample resource model.
//!
//! A [`Sample`] is the persisted record; a [`SampleDraft`] carries the same
//! validated fields before the storage port has assigned an identifier.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Maximum length of a sample name, in characters.
pub const SAMPLE_NAME_MAX: usize = 64;
/// Maximum length of an email address, in characters.
pub const EMAIL_MAX: usize = 254;

/// Validation errors raised by the sample constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleValidationError {
    EmptyId,
    EmptyName,
    NameTooLong { max: usize },
    EmptyEmail,
    EmailTooLong { max: usize },
    InvalidEmail,
}

impl fmt::Display for SampleValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "sample id must not be empty"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmailTooLong { max } => write!(f, "email must be at most {max} characters"),
            Self::InvalidEmail => write!(f, "email must be a valid email address"),
        }
    }
}

impl std::error::Error for SampleValidationError {}

/// Identifier assigned to a sample by the storage port.
///
/// No format is imposed beyond being non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SampleId(String);

impl SampleId {
    /// Validate and construct a [`SampleId`].
    pub fn new(id: impl Into<String>) -> Result<Self, SampleValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(SampleValidationError::EmptyId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for SampleId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for SampleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SampleId> for String {
    fn from(value: SampleId) -> Self {
        value.0
    }
}

impl TryFrom<String> for SampleId {
    type Error = SampleValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Display name of a sample, stored exactly as supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SampleName(String);

impl SampleName {
    /// Validate and construct a [`SampleName`].
    pub fn new(name: impl Into<String>) -> Result<Self, SampleValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SampleValidationError::EmptyName);
        }
        if name.chars().count() > SAMPLE_NAME_MAX {
            return Err(SampleValidationError::NameTooLong {
                max: SAMPLE_NAME_MAX,
            });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for SampleName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<SampleName> for String {
    fn from(value: SampleName) -> Self {
        value.0
    }
}

impl TryFrom<String> for SampleName {
    type Error = SampleValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        // One `@`, no whitespace, and a dot somewhere in the domain part.
        let pattern = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
        Regex::new(pattern).unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Contact email address of a sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, SampleValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(SampleValidationError::EmptyEmail);
        }
        if email.chars().count() > EMAIL_MAX {
            return Err(SampleValidationError::EmailTooLong { max: EMAIL_MAX });
        }
        if !email_regex().is_match(&email) {
            return Err(SampleValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = SampleValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Validated sample fields awaiting an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleDraft {
    name: SampleName,
    email: EmailAddress,
}

impl SampleDraft {
    /// Build a draft from validated components.
    pub fn new(name: SampleName, email: EmailAddress) -> Self {
        Self { name, email }
    }

    /// Validate raw inputs. The name is checked before the email.
    pub fn try_from_parts(
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<Self, SampleValidationError> {
        Ok(Self::new(SampleName::new(name)?, EmailAddress::new(email)?))
    }

    /// Name of the sample.
    pub fn name(&self) -> &SampleName {
        &self.name
    }

    /// Email of the sample.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Attach an identifier, producing a full record.
    pub fn with_id(self, id: SampleId) -> Sample {
        Sample {
            id,
            name: self.name,
            email: self.email,
        }
    }
}

/// Persisted sample record.
///
/// ## Invariants
/// - `id` is non-blank.
/// - `name` and `email` satisfy the [`SampleDraft`] rules.
///
/// # Examples
/// ```
/// use backend::domain::{SampleDraft, SampleId};
///
/// let sample = SampleDraft::try_from_parts("Alice", "a@x.com")
///     .expect("valid draft")
///     .with_id(SampleId::new("42").expect("valid id"));
/// assert_eq!(sample.id().as_ref(), "42");
/// assert_eq!(sample.name().as_ref(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sample {
    id: SampleId,
    name: SampleName,
    email: EmailAddress,
}

impl Sample {
    /// Build a record from validated components.
    pub fn new(id: SampleId, name: SampleName, email: EmailAddress) -> Self {
        Self { id, name, email }
    }

    /// Stable identifier.
    pub fn id(&self) -> &SampleId {
        &self.id
    }

    /// Name of the sample.
    pub fn name(&self) -> &SampleName {
        &self.name
    }

    /// Email of the sample.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }
}

#[cfg(test)]
mod tests;

//! Driven port for sample persistence.
//!
//! HTTP handlers depend on this trait only; adapters decide where samples
//! live. The one error distinction handlers care about is whether a sample
//! was missing, so [`SampleRepositoryError::NotFound`] is its own variant and
//! everything else is an internal failure.

use async_trait::async_trait;
use tracing::error;

use crate::domain::{Error, Sample, SampleDraft, SampleId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by sample repository adapters.
    pub enum SampleRepositoryError {
        /// No sample exists with the requested identifier.
        NotFound { id: String } => "sample not found: {id}",
        /// Repository connection could not be established.
        Connection { message: String } => "sample repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "sample repository query failed: {message}",
    }
}

impl SampleRepositoryError {
    /// Whether the error reports a missing sample.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Port for reading and writing samples.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SampleRepository: Send + Sync {
    /// Return every stored sample, in the adapter's natural order.
    async fn find_all(&self) -> Result<Vec<Sample>, SampleRepositoryError>;

    /// Fetch one sample.
    async fn find_one(&self, id: &SampleId) -> Result<Sample, SampleRepositoryError>;

    /// Persist a new sample, assigning its identifier.
    async fn create(&self, draft: SampleDraft) -> Result<Sample, SampleRepositoryError>;

    /// Replace the fields of an existing sample.
    async fn update(&self, sample: Sample) -> Result<Sample, SampleRepositoryError>;

    /// Remove a sample.
    async fn delete(&self, id: &SampleId) -> Result<(), SampleRepositoryError>;
}

impl From<SampleRepositoryError> for Error {
    fn from(err: SampleRepositoryError) -> Self {
        if err.is_not_found() {
            return Error::not_found(err.to_string());
        }
        error!(error = %err, "sample repository failure");
        Error::internal(err.to_string())
    }
}

//! In-memory implementation of the [`SampleRepository`] port.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{SampleRepository, SampleRepositoryError};
use crate::domain::{Sample, SampleDraft, SampleId};

/// Sample store keeping records in insertion order.
///
/// # Examples
/// ```
/// use backend::domain::ports::SampleRepository;
/// use backend::domain::SampleDraft;
/// use backend::outbound::memory::InMemorySampleRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemorySampleRepository::new();
/// let draft = SampleDraft::try_from_parts("Alice", "a@x.com").unwrap();
/// let created = repo.create(draft).await.unwrap();
/// assert_eq!(repo.find_one(created.id()).await.unwrap(), created);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemorySampleRepository {
    samples: RwLock<Vec<Sample>>,
}

impl InMemorySampleRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `samples`, kept in the given order.
    pub fn with_samples(samples: impl IntoIterator<Item = Sample>) -> Self {
        Self {
            samples: RwLock::new(samples.into_iter().collect()),
        }
    }

    fn generate_id() -> Result<SampleId, SampleRepositoryError> {
        SampleId::new(Uuid::new_v4().to_string())
            .map_err(|err| SampleRepositoryError::query(format!("generated invalid id: {err}")))
    }
}

fn position_of(samples: &[Sample], id: &SampleId) -> Result<usize, SampleRepositoryError> {
    samples
        .iter()
        .position(|sample| sample.id() == id)
        .ok_or_else(|| SampleRepositoryError::not_found(id.as_ref()))
}

#[async_trait]
impl SampleRepository for InMemorySampleRepository {
    async fn find_all(&self) -> Result<Vec<Sample>, SampleRepositoryError> {
        Ok(self.samples.read().await.clone())
    }

    async fn find_one(&self, id: &SampleId) -> Result<Sample, SampleRepositoryError> {
        self.samples
            .read()
            .await
            .iter()
            .find(|sample| sample.id() == id)
            .cloned()
            .ok_or_else(|| SampleRepositoryError::not_found(id.as_ref()))
    }

    async fn create(&self, draft: SampleDraft) -> Result<Sample, SampleRepositoryError> {
        let sample = draft.with_id(Self::generate_id()?);
        self.samples.write().await.push(sample.clone());
        debug!(sample_id = %sample.id(), "sample created");
        Ok(sample)
    }

    async fn update(&self, sample: Sample) -> Result<Sample, SampleRepositoryError> {
        let mut samples = self.samples.write().await;
        let index = position_of(&samples, sample.id())?;
        if let Some(slot) = samples.get_mut(index) {
            *slot = sample.clone();
        }
        debug!(sample_id = %sample.id(), "sample updated");
        Ok(sample)
    }

    async fn delete(&self, id: &SampleId) -> Result<(), SampleRepositoryError> {
        let mut samples = self.samples.write().await;
        let index = position_of(&samples, id)?;
        samples.remove(index);
        debug!(sample_id = %id, "sample deleted");
        Ok(())
    }
}

//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod sample_repository;

#[cfg(test)]
pub use sample_repository::MockSampleRepository;
pub use sample_repository::{SampleRepository, SampleRepositoryError};

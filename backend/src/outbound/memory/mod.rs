//! Process-local adapters backed by in-memory collections.
//!
//! State is lost on restart. These adapters let the server run end to end
//! without external infrastructure and double as realistic test fixtures.

mod sample_repository;

pub use sample_repository::InMemorySampleRepository;

//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data` so they depend on the
//! storage port alone and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::SampleRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Storage port backing the `/samples` endpoints.
    pub samples: Arc<dyn SampleRepository>,
}

impl HttpState {
    /// Bundle the given port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::inbound::http::state::HttpState;
    /// use backend::outbound::memory::InMemorySampleRepository;
    ///
    /// let state = HttpState::new(Arc::new(InMemorySampleRepository::new()));
    /// let _shared = state.clone();
    /// ```
    pub fn new(samples: Arc<dyn SampleRepository>) -> Self {
        Self { samples }
    }
}

//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

#[cfg(feature = "metrics")]
use actix_web_prom::PrometheusMetrics;
use backend::domain::ports::SampleRepository;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) samples: Arc<dyn SampleRepository>,
    #[cfg(feature = "metrics")]
    pub(crate) prometheus: Option<PrometheusMetrics>,
}

impl ServerConfig {
    /// Configure a server bound to `bind_addr` and serving `samples`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, samples: Arc<dyn SampleRepository>) -> Self {
        Self {
            bind_addr,
            samples,
            #[cfg(feature = "metrics")]
            prometheus: None,
        }
    }

    /// Socket address the server will bind to.
    #[cfg_attr(
        not(test),
        expect(dead_code, reason = "read by the server wiring tests only")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    #[cfg(feature = "metrics")]
    /// Attach Prometheus middleware.
    #[must_use]
    pub fn with_metrics(mut self, prometheus: Option<PrometheusMetrics>) -> Self {
        self.prometheus = prometheus;
        self
    }
}

//! Prometheus request metrics behind the `metrics` feature.

use std::sync::Arc;

use actix_service::{
    Service, ServiceExt as _, Transform,
    boxed::{self, BoxService},
};
use actix_web::body::{BoxBody, MessageBody};
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::middleware::Compat;
use actix_web_prom::PrometheusMetrics;
use futures_util::future::LocalBoxFuture;

type BoxedAppService = BoxService<ServiceRequest, ServiceResponse<BoxBody>, actix_web::Error>;

/// Instruments the app with Prometheus when a registry is supplied.
///
/// Both branches box the wrapped service, so `App::wrap` yields one type
/// regardless of configuration.
#[derive(Clone, Default)]
pub(crate) struct MetricsLayer {
    prometheus: Option<Arc<PrometheusMetrics>>,
}

impl MetricsLayer {
    pub(crate) fn new(prometheus: Option<PrometheusMetrics>) -> Self {
        Self {
            prometheus: prometheus.map(Arc::new),
        }
    }
}

fn passthrough<S, B>(service: S) -> BoxedAppService
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: MessageBody + 'static,
{
    boxed::service(service.map(ServiceResponse::<B>::map_into_boxed_body))
}

impl<S, B> Transform<S, ServiceRequest> for MetricsLayer
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error> + 'static,
    B: MessageBody + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = BoxedAppService;
    type Future = LocalBoxFuture<'static, Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        let Some(prometheus) = self.prometheus.as_deref() else {
            let plain = passthrough(service);
            return Box::pin(async move { Ok(plain) });
        };
        let instrumented = Compat::new(prometheus.clone()).new_transform(service);
        Box::pin(async move { instrumented.await.map(boxed::service) })
    }
}

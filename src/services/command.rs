use log::debug;
use std::pin::Pin;
use std::sync::Arc;
use std::task::Poll;
use tokio::sync::Mutex;
use tower::{BoxError, Layer, Service, ServiceExt};

use crate::types::request::Request;

/// Turns raw request lines into `Request`s for the inner service.
pub struct CommandService<S> {
    inner: Arc<Mutex<S>>,
}

impl<S> CommandService<S> {
    fn new(inner: S) -> Self {
        CommandService {
            inner: Arc::new(Mutex::new(inner)),
        }
    }
}

impl<S> Service<&[u8]> for CommandService<S>
where
    S: Service<Request> + Send + 'static,
    S::Response: Send + 'static,
    S::Error: Into<BoxError>,
    S::Future: Send + 'static,
{
    type Response = S::Response;
    type Error = BoxError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut std::task::Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, raw: &[u8]) -> Self::Future {
        let maybe_request = Request::try_from(raw);
        let inner = self.inner.clone();

        Box::pin(async move {
            let request = maybe_request.map_err(BoxError::from)?;
            debug!("request received: {request:?}");
            let mut guard = inner.lock().await;
            let svc = ServiceExt::<Request>::ready(&mut *guard)
                .await
                .map_err(Into::<BoxError>::into)?;
            let response = svc.call(request).await.map_err(Into::<BoxError>::into)?;
            Ok::<_, BoxError>(response)
        })
    }
}

pub struct CommandLayer;

impl<S> Layer<S> for CommandLayer {
    type Service = CommandService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        CommandService::new(inner)
    }
}

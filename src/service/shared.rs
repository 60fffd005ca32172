use alloc::sync::Arc;

use super::base::Service;

/// Type-erased service behind an [`Arc`], so clones are cheap and call the same service.
pub(crate) struct SharedService<Request, Response, Error>(Arc<dyn Service<Request, Response = Response, Error = Error> + Send + Sync>);

impl<Request, Response, Error> SharedService<Request, Response, Error> {
    #[inline]
    #[must_use]
    pub(crate) fn new<S>(service: S) -> Self
    where
        S: Service<Request, Response = Response, Error = Error> + Send + Sync + 'static,
    {
        Self(Arc::new(service))
    }
}

impl<Request, Response, Error> Clone for SharedService<Request, Response, Error> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<Request, Response, Error> Service<Request> for SharedService<Request, Response, Error> {
    type Response = Response;
    type Error = Error;

    #[inline]
    fn call(&self, request: Request) -> Result<Self::Response, Self::Error> {
        self.0.call(request)
    }
}

#[cfg(test)]
mod tests {
    use alloc::sync::Arc;
    use core::{
        convert::Infallible,
        sync::atomic::{AtomicU8, Ordering},
    };

    use super::SharedService;
    use crate::service::{service_fn, Service as _};

    #[test]
    fn test_clones_share_service() {
        let calls = Arc::new(AtomicU8::new(0));
        let service: SharedService<u8, u8, Infallible> = SharedService::new(service_fn({
            let calls = calls.clone();
            move |step: u8| Ok::<_, Infallible>(calls.fetch_add(step, Ordering::SeqCst) + step)
        }));
        let cloned = service.clone();

        assert_eq!(service.call(2).unwrap(), 2);
        assert_eq!(cloned.call(1).unwrap(), 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }
}

use super::base::Service;

#[inline]
#[must_use]
pub(crate) const fn service_fn<T>(f: T) -> ServiceFn<T> {
    ServiceFn { f }
}

pub(crate) struct ServiceFn<T> {
    f: T,
}

impl<F, Request, Response, Error> Service<Request> for ServiceFn<F>
where
    F: Fn(Request) -> Result<Response, Error>,
{
    type Response = Response;
    type Error = Error;

    #[inline]
    fn call(&self, request: Request) -> Result<Self::Response, Self::Error> {
        (self.f)(request)
    }
}

#[cfg(test)]
mod tests {
    use core::sync::atomic::{AtomicU8, Ordering};

    use super::{service_fn, Service as _};

    #[test]
    fn test_service_called_through_shared_reference() {
        let calls = AtomicU8::new(0);
        let service = service_fn(|step: u8| {
            calls.fetch_add(1, Ordering::SeqCst);
            if step == 0 {
                return Err("zero step");
            }
            Ok(step * 2)
        });
        let shared = &service;

        assert_eq!(shared.call(2), Ok(4));
        assert_eq!(service.call(0), Err("zero step"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}

/// Fallible function from a request to a response.
///
/// Calls take `&self`, so one service can be shared between resolutions running at the same time.
pub(crate) trait Service<Request> {
    type Response;
    type Error;

    fn call(&self, request: Request) -> Result<Self::Response, Self::Error>;
}

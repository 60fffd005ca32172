mod injector;
mod instantiate;
mod instantiator;
mod registry;

pub use injector::ResolveErrorKind;
pub use instantiate::InstantiateErrorKind;
pub(crate) use instantiator::InstantiatorErrorKind;
pub use registry::BuildErrorKind;

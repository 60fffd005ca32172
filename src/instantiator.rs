use alloc::{boxed::Box, sync::Arc, vec::Vec};
use core::any::Any;
use tracing::debug;

use super::{
    any::TypeInfo,
    errors::{InstantiateErrorKind, InstantiatorErrorKind, ResolveErrorKind},
    injector::Request,
    parameters::{Arguments, Parameters},
    service::{service_fn, Service as _, SharedService},
};

/// Constructor of a plain class: a function from its resolved parameters to the class itself.
///
/// Implemented for closures and functions `FnMut(T1, .., Tn) -> Result<Provides, Error>` with up to 16 parameters.
pub trait Constructor<Params>: Clone + Send + Sync + 'static
where
    Params: Parameters,
{
    type Provides: 'static;
    type Error: Into<InstantiateErrorKind>;

    fn construct(&mut self, parameters: Params) -> Result<Self::Provides, Self::Error>;
}

/// Provider method of a module `M`.
///
/// Receives a fresh instance of the module followed by its resolved parameters.
/// Implemented for closures and functions `FnMut(M, T1, .., Tn) -> Result<Provides, Error>` with up to 16 parameters.
pub trait Method<M, Params>: Clone + Send + Sync + 'static
where
    Params: Parameters,
{
    type Provides: 'static;
    type Error: Into<InstantiateErrorKind>;

    fn invoke(&mut self, module: M, parameters: Params) -> Result<Self::Provides, Self::Error>;
}

pub(crate) type SharedConstructor = SharedService<Arguments, Box<dyn Any>, InstantiatorErrorKind<ResolveErrorKind, InstantiateErrorKind>>;

pub(crate) type SharedProvider = SharedService<Request, Box<dyn Any>, InstantiatorErrorKind<ResolveErrorKind, InstantiateErrorKind>>;

#[must_use]
pub(crate) fn shared_constructor<Ctor, Params>(constructor: Ctor) -> SharedConstructor
where
    Ctor: Constructor<Params>,
    Params: Parameters,
{
    SharedService::new(service_fn({
        move |mut arguments: Arguments| {
            let parameters = match Params::from_arguments(&mut arguments) {
                Ok(parameters) => parameters,
                Err(err) => return Err(InstantiatorErrorKind::Deps(err)),
            };
            let provides = match constructor.clone().construct(parameters) {
                Ok(provides) => provides,
                Err(err) => return Err(InstantiatorErrorKind::Factory(err.into())),
            };

            debug!("Constructed");

            Ok(Box::new(provides) as _)
        }
    }))
}

#[must_use]
pub(crate) fn shared_method<M, Meth, Params>(module_factory: fn() -> M, method: Meth) -> SharedConstructor
where
    M: 'static,
    Meth: Method<M, Params>,
    Params: Parameters,
{
    SharedService::new(service_fn({
        move |mut arguments: Arguments| {
            let parameters = match Params::from_arguments(&mut arguments) {
                Ok(parameters) => parameters,
                Err(err) => return Err(InstantiatorErrorKind::Deps(err)),
            };
            let provides = match method.clone().invoke(module_factory(), parameters) {
                Ok(provides) => provides,
                Err(err) => return Err(InstantiatorErrorKind::Factory(err.into())),
            };

            debug!("Provided by module");

            Ok(Box::new(provides) as _)
        }
    }))
}

/// Wraps a constructor into a provider that resolves `parameter_types` in order
/// and passes the values positionally.
/// Without a parameter list the constructor is called with no arguments.
#[must_use]
pub(crate) fn shared_provider(constructor: SharedConstructor, parameter_types: Option<Arc<[TypeInfo]>>) -> SharedProvider {
    SharedService::new(service_fn({
        move |request: Request| {
            let arguments = match &parameter_types {
                None => Arguments::empty(),
                Some(parameter_types) => {
                    let mut values = Vec::with_capacity(parameter_types.len());
                    for type_info in parameter_types.iter() {
                        match request.resolve(*type_info) {
                            Ok(value) => values.push(value),
                            Err(err) => return Err(InstantiatorErrorKind::Deps(err)),
                        }
                    }
                    Arguments::new(values)
                }
            };

            constructor.call(arguments)
        }
    }))
}

macro_rules! impl_constructor {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case)]
        impl<F, Response, Err, $($ty,)*> Constructor<($($ty,)*)> for F
        where
            F: FnMut($($ty,)*) -> Result<Response, Err> + Clone + Send + Sync + 'static,
            Response: 'static,
            Err: Into<InstantiateErrorKind>,
            $( $ty: 'static, )*
        {
            type Provides = Response;
            type Error = Err;

            #[inline]
            fn construct(&mut self, ($($ty,)*): ($($ty,)*)) -> Result<Self::Provides, Self::Error> {
                self($($ty,)*)
            }
        }
    };
}

all_the_tuples!(impl_constructor);

macro_rules! impl_method {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case)]
        impl<F, M, Response, Err, $($ty,)*> Method<M, ($($ty,)*)> for F
        where
            F: FnMut(M, $($ty,)*) -> Result<Response, Err> + Clone + Send + Sync + 'static,
            Response: 'static,
            Err: Into<InstantiateErrorKind>,
            $( $ty: 'static, )*
        {
            type Provides = Response;
            type Error = Err;

            #[inline]
            fn invoke(&mut self, module: M, ($($ty,)*): ($($ty,)*)) -> Result<Self::Provides, Self::Error> {
                self(module, $($ty,)*)
            }
        }
    };
}

all_the_tuples!(impl_method);

/// Wrapper to create a constructor that just returns passed value.
/// It can be used when the value was created outside the injector.
#[inline]
#[must_use]
pub fn instance<T: Clone + Send + Sync + 'static>(val: T) -> impl Constructor<(), Provides = T, Error = InstantiateErrorKind> {
    move || Ok(val.clone())
}

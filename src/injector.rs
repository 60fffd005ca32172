use alloc::{boxed::Box, sync::Arc, vec::Vec};
use core::any::{type_name, Any};
use tracing::{debug, debug_span, error, info_span};

use crate::{
    any::TypeInfo,
    config::Config,
    declaration::Declaration,
    errors::{BuildErrorKind, InstantiatorErrorKind, ResolveErrorKind},
    metadata::{DeclaredMetadata, TypeMetadata},
    registry::{ProviderData, Registry},
    service::Service as _,
};

/// Resolves types registered from class and module declarations.
///
/// The registry is built once and shared between clones.
/// Every [`Injector::get`] call invokes the providers again, nothing is cached.
#[derive(Clone)]
pub struct Injector {
    registry: Arc<Registry>,
}

impl Injector {
    /// Creates injector from declarations with default config.
    ///
    /// # Errors
    /// See [`Self::with_metadata`]
    #[inline]
    pub fn new<I>(declarations: I) -> Result<Self, BuildErrorKind>
    where
        I: IntoIterator,
        I::Item: Into<Declaration>,
    {
        Self::with_config(declarations, Config::default())
    }

    /// # Errors
    /// See [`Self::with_metadata`]
    #[inline]
    pub fn with_config<I>(declarations: I, config: Config) -> Result<Self, BuildErrorKind>
    where
        I: IntoIterator,
        I::Item: Into<Declaration>,
    {
        Self::with_metadata(declarations, config, &DeclaredMetadata)
    }

    /// Creates injector using the given metadata source.
    ///
    /// # Errors
    /// - Returns [`BuildErrorKind::MalformedDeclaration`] if metadata disagrees with a declaration's role
    /// - Returns [`BuildErrorKind::DuplicateBinding`] if a type is provided twice and [`crate::DuplicatePolicy::Reject`] is used
    /// - Returns [`BuildErrorKind::MissingDependency`] or [`BuildErrorKind::CyclicDependency`] if validation is enabled and fails
    pub fn with_metadata<I, Meta>(declarations: I, config: Config, metadata: &Meta) -> Result<Self, BuildErrorKind>
    where
        I: IntoIterator,
        I::Item: Into<Declaration>,
        Meta: TypeMetadata + ?Sized,
    {
        let registry = Registry::build(declarations.into_iter().map(Into::into), config, metadata)?;
        Ok(Self {
            registry: Arc::new(registry),
        })
    }

    /// Resolves a new instance of `Dep` with all its dependencies.
    ///
    /// # Errors
    /// - Returns [`ResolveErrorKind::NoProvider`] if `Dep` or one of its dependencies isn't provided
    /// - Returns [`ResolveErrorKind::CyclicDependency`] if `Dep` depends on itself
    /// - Returns [`ResolveErrorKind::Instantiate`] if a constructor fails
    pub fn get<Dep: 'static>(&self) -> Result<Dep, ResolveErrorKind> {
        let span = info_span!("get", dependency = type_name::<Dep>());
        let _guard = span.enter();

        let expected = TypeInfo::of::<Dep>();
        match Request::new(self.registry.clone()).resolve(expected)?.downcast::<Dep>() {
            Ok(dependency) => Ok(*dependency),
            Err(incorrect_type) => {
                let err = ResolveErrorKind::IncorrectType {
                    expected,
                    actual: (*incorrect_type).type_id(),
                };
                error!("{}", err);
                Err(err)
            }
        }
    }

    /// Resolves a new instance of the type described by `type_info`.
    ///
    /// # Errors
    /// See [`Self::get`]
    pub fn get_dyn(&self, type_info: TypeInfo) -> Result<Box<dyn Any>, ResolveErrorKind> {
        let span = info_span!("get_dyn", dependency = type_info.name);
        let _guard = span.enter();

        Request::new(self.registry.clone()).resolve(type_info)
    }

    #[inline]
    #[must_use]
    pub fn contains<Dep: 'static>(&self) -> bool {
        self.registry.get(&TypeInfo::of::<Dep>()).is_some()
    }

    /// Types that can be requested from the injector
    #[inline]
    pub fn provided_types(&self) -> impl Iterator<Item = TypeInfo> + '_ {
        self.registry.type_infos()
    }
}

/// Single step of a resolution.
/// Holds the chain of types being resolved, from the requested one down to the current one.
pub(crate) struct Request {
    registry: Arc<Registry>,
    path: Vec<TypeInfo>,
}

impl Request {
    #[inline]
    #[must_use]
    pub(crate) const fn new(registry: Arc<Registry>) -> Self {
        Self {
            registry,
            path: Vec::new(),
        }
    }

    pub(crate) fn resolve(&self, type_info: TypeInfo) -> Result<Box<dyn Any>, ResolveErrorKind> {
        let span = debug_span!("resolve", dependency = type_info.name, depth = self.path.len());
        let _guard = span.enter();

        if let Some(position) = self.path.iter().position(|in_progress| *in_progress == type_info) {
            let mut cycle = self.path[position..].to_vec();
            cycle.push(type_info);

            let err = ResolveErrorKind::CyclicDependency { cycle: cycle.into() };
            error!("{}", err);
            return Err(err);
        }

        let Some(ProviderData { provider, .. }) = self.registry.get(&type_info) else {
            let err = ResolveErrorKind::NoProvider {
                type_info,
                chain: self.path.as_slice().into(),
            };
            error!("{}", err);
            return Err(err);
        };

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(type_info);

        match provider.call(Request {
            registry: self.registry.clone(),
            path,
        }) {
            Ok(dependency) => {
                debug!("Resolved");
                Ok(dependency)
            }
            Err(InstantiatorErrorKind::Deps(err)) => {
                debug!("Dependency not resolved");
                Err(err)
            }
            Err(InstantiatorErrorKind::Factory(source)) => {
                let err = ResolveErrorKind::Instantiate { type_info, source };
                error!("{}", err);
                Err(err)
            }
        }
    }
}

use alloc::{boxed::Box, vec::Vec};
use core::fmt::{self, Debug, Formatter};
use tracing::debug;

use crate::{
    any::TypeInfo,
    errors::InstantiateErrorKind,
    instantiator::{shared_constructor, shared_method, Constructor, Method, SharedConstructor},
    parameters::Parameters,
};

/// Marker that decides how a declaration is registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// A plain class, it provides itself.
    Injectable,
    /// A group of provider methods, each provides its return type.
    Module,
}

pub struct ClassDeclaration {
    type_info: TypeInfo,
    parameter_types: Option<Box<[TypeInfo]>>,
    pub(crate) constructor: SharedConstructor,
}

impl ClassDeclaration {
    #[inline]
    #[must_use]
    pub const fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    /// Constructor parameter types in order, `None` for a constructor without parameters
    #[inline]
    #[must_use]
    pub fn parameter_types(&self) -> Option<&[TypeInfo]> {
        self.parameter_types.as_deref()
    }
}

impl Debug for ClassDeclaration {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassDeclaration")
            .field("type_info", &self.type_info)
            .field("parameter_types", &self.parameter_types)
            .finish_non_exhaustive()
    }
}

/// Declares a plain class constructed by `constructor`.
///
/// The class is its constructor's return type and its dependencies are the constructor parameters,
/// resolved in order each time the class is requested.
///
/// # Examples
/// ```rust
/// use modi::class;
///
/// struct Engine;
/// struct Car {
///     engine: Engine,
/// }
///
/// let engine = class(|| Ok(Engine));
/// let car = class(|engine: Engine| Ok(Car { engine }));
///
/// assert!(engine.parameter_types().is_none());
/// assert_eq!(car.parameter_types().map(<[_]>::len), Some(1));
/// ```
#[must_use]
pub fn class<Ctor, Params>(constructor: Ctor) -> ClassDeclaration
where
    Ctor: Constructor<Params, Error = InstantiateErrorKind>,
    Params: Parameters,
{
    ClassDeclaration {
        type_info: TypeInfo::of::<Ctor::Provides>(),
        parameter_types: Params::type_infos(),
        constructor: shared_constructor(constructor),
    }
}

pub struct ProviderMethod {
    name: &'static str,
    return_type: TypeInfo,
    parameter_types: Option<Box<[TypeInfo]>>,
    pub(crate) invoke: SharedConstructor,
}

impl ProviderMethod {
    #[inline]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    #[must_use]
    pub const fn return_type(&self) -> TypeInfo {
        self.return_type
    }

    #[inline]
    #[must_use]
    pub fn parameter_types(&self) -> Option<&[TypeInfo]> {
        self.parameter_types.as_deref()
    }
}

impl Debug for ProviderMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderMethod")
            .field("name", &self.name)
            .field("return_type", &self.return_type)
            .field("parameter_types", &self.parameter_types)
            .finish_non_exhaustive()
    }
}

#[derive(Debug)]
pub struct ModuleDeclaration {
    type_info: TypeInfo,
    methods: Vec<ProviderMethod>,
}

impl ModuleDeclaration {
    #[inline]
    #[must_use]
    pub const fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    #[inline]
    #[must_use]
    pub fn methods(&self) -> &[ProviderMethod] {
        &self.methods
    }
}

pub struct ModuleBuilder<M> {
    factory: fn() -> M,
    methods: Vec<ProviderMethod>,
}

/// Starts a module declaration for `M`.
///
/// Each call of a provider method gets a fresh `M::default()`, the module itself is never resolved by the injector.
/// Use [`ModuleBuilder::new`] for a module without [`Default`].
#[inline]
#[must_use]
pub fn module<M: Default + 'static>() -> ModuleBuilder<M> {
    ModuleBuilder::new(M::default)
}

impl<M: 'static> ModuleBuilder<M> {
    #[inline]
    #[must_use]
    pub fn new(factory: fn() -> M) -> Self {
        Self {
            factory,
            methods: Vec::new(),
        }
    }

    /// Adds a provider method. The method's return type is the type it provides.
    ///
    /// The method receives a fresh module instance followed by its own parameters,
    /// which are resolved the same way as class constructor parameters.
    #[must_use]
    pub fn provide<Meth, Params>(mut self, name: &'static str, method: Meth) -> Self
    where
        Meth: Method<M, Params, Error = InstantiateErrorKind>,
        Params: Parameters,
    {
        self.methods.push(ProviderMethod {
            name,
            return_type: TypeInfo::of::<Meth::Provides>(),
            parameter_types: Params::type_infos(),
            invoke: shared_method(self.factory, method),
        });
        self
    }

    #[must_use]
    pub fn build(self) -> ModuleDeclaration {
        let declaration = ModuleDeclaration {
            type_info: TypeInfo::of::<M>(),
            methods: self.methods,
        };
        debug!(module = declaration.type_info.name, methods = declaration.methods.len(), "Module declared");
        declaration
    }
}

#[derive(Debug)]
pub enum Declaration {
    Class(ClassDeclaration),
    Module(ModuleDeclaration),
}

impl Declaration {
    #[inline]
    #[must_use]
    pub const fn role(&self) -> Role {
        match self {
            Self::Class(_) => Role::Injectable,
            Self::Module(_) => Role::Module,
        }
    }

    /// The declared class or module type
    #[inline]
    #[must_use]
    pub const fn type_info(&self) -> TypeInfo {
        match self {
            Self::Class(class) => class.type_info,
            Self::Module(module) => module.type_info,
        }
    }
}

impl From<ClassDeclaration> for Declaration {
    fn from(value: ClassDeclaration) -> Self {
        Self::Class(value)
    }
}

impl From<ModuleDeclaration> for Declaration {
    fn from(value: ModuleDeclaration) -> Self {
        Self::Module(value)
    }
}

impl<M: 'static> From<ModuleBuilder<M>> for Declaration {
    fn from(value: ModuleBuilder<M>) -> Self {
        Self::Module(value.build())
    }
}

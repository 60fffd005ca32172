use alloc::boxed::Box;

use crate::{
    any::TypeInfo,
    declaration::{ClassDeclaration, Declaration, ModuleDeclaration, ProviderMethod, Role},
};

/// Source of type metadata consulted once per declaration while the registry is built.
///
/// [`DeclaredMetadata`] reads what the declarations carry themselves.
/// Another implementation may report something else, but the values passed to a constructor must still match its signature,
/// otherwise resolution fails with [`crate::ResolveErrorKind::ArgumentMismatch`].
pub trait TypeMetadata {
    /// Whether the declaration must be registered as a module
    fn is_module(&self, declaration: &Declaration) -> bool;

    /// Ordered constructor parameter types of a class, `None` for a constructor without parameters
    fn parameter_types(&self, class: &ClassDeclaration) -> Option<Box<[TypeInfo]>>;

    /// Type provided by a module's method
    fn return_type(&self, module: &ModuleDeclaration, method: &ProviderMethod) -> TypeInfo;

    /// Ordered parameter types of a module's method, `None` for a method without parameters
    fn method_parameter_types(&self, module: &ModuleDeclaration, method: &ProviderMethod) -> Option<Box<[TypeInfo]>>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DeclaredMetadata;

impl TypeMetadata for DeclaredMetadata {
    #[inline]
    fn is_module(&self, declaration: &Declaration) -> bool {
        declaration.role() == Role::Module
    }

    #[inline]
    fn parameter_types(&self, class: &ClassDeclaration) -> Option<Box<[TypeInfo]>> {
        class.parameter_types().map(Into::into)
    }

    #[inline]
    fn return_type(&self, _module: &ModuleDeclaration, method: &ProviderMethod) -> TypeInfo {
        method.return_type()
    }

    #[inline]
    fn method_parameter_types(&self, _module: &ModuleDeclaration, method: &ProviderMethod) -> Option<Box<[TypeInfo]>> {
        method.parameter_types().map(Into::into)
    }
}

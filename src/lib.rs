#![no_std]

extern crate alloc;

#[macro_use]
pub(crate) mod macros;

pub(crate) mod any;
pub(crate) mod config;
pub(crate) mod declaration;
pub(crate) mod errors;
pub(crate) mod injector;
pub(crate) mod instantiator;
pub(crate) mod metadata;
pub(crate) mod parameters;
pub(crate) mod registry;
pub(crate) mod service;

pub use any::{TypeChain, TypeInfo};
pub use config::{Config, DuplicatePolicy};
pub use declaration::{class, module, ClassDeclaration, Declaration, ModuleBuilder, ModuleDeclaration, ProviderMethod, Role};
pub use errors::{BuildErrorKind, InstantiateErrorKind, ResolveErrorKind};
pub use injector::Injector;
pub use instantiator::{instance, Constructor, Method};
pub use metadata::{DeclaredMetadata, TypeMetadata};
pub use parameters::{Arguments, Parameters};

#[doc(hidden)]
pub mod __private {
    pub use alloc::vec::Vec;
}

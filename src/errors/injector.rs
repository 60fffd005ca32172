use core::any::TypeId;

use super::instantiate::InstantiateErrorKind;
use crate::any::{TypeChain, TypeInfo};

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    #[error("Provider for {type_info} not found in registry. Requested by: {chain}")]
    NoProvider { type_info: TypeInfo, chain: TypeChain },
    #[error("Cyclic dependency detected: {cycle}")]
    CyclicDependency { cycle: TypeChain },
    #[error("Argument {position} doesn't match the parameter. Expected: {expected}, actual: {actual:?}")]
    ArgumentMismatch {
        position: usize,
        expected: TypeInfo,
        /// `None` if the argument is missing
        actual: Option<TypeId>,
    },
    #[error("Incorrect provider provides type. Actual: {actual:?}, expected: {expected}")]
    IncorrectType { expected: TypeInfo, actual: TypeId },
    #[error("Failed to instantiate {type_info}: {source}")]
    Instantiate { type_info: TypeInfo, source: InstantiateErrorKind },
}

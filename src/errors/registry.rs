use crate::{
    any::{TypeChain, TypeInfo},
    declaration::Role,
};

#[derive(thiserror::Error, Debug)]
pub enum BuildErrorKind {
    #[error("Declaration {type_info} is marked as {declared:?}, but metadata reports it as {reported:?}")]
    MalformedDeclaration {
        type_info: TypeInfo,
        declared: Role,
        reported: Role,
    },
    #[error("{type_info} is provided by both {previous} and {current}")]
    DuplicateBinding {
        type_info: TypeInfo,
        previous: TypeInfo,
        current: TypeInfo,
    },
    #[error("{dependency} required by {type_info} isn't provided by any declaration")]
    MissingDependency { type_info: TypeInfo, dependency: TypeInfo },
    #[error("Cyclic dependency detected: {cycle}")]
    CyclicDependency { cycle: TypeChain },
}

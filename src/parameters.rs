use alloc::{
    boxed::Box,
    vec::{self, Vec},
};
use core::any::Any;
use tracing::warn;

use crate::{any::TypeInfo, errors::ResolveErrorKind};

/// Resolved values passed positionally to a constructor or a provider method.
pub struct Arguments {
    values: vec::IntoIter<Box<dyn Any>>,
    position: usize,
}

impl Arguments {
    #[inline]
    #[must_use]
    pub(crate) fn new(values: Vec<Box<dyn Any>>) -> Self {
        Self {
            values: values.into_iter(),
            position: 0,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Takes the next argument.
    ///
    /// # Errors
    /// Returns [`ResolveErrorKind::ArgumentMismatch`] if there are no arguments left
    /// or the next one isn't a `T`.
    pub fn take<T: 'static>(&mut self) -> Result<T, ResolveErrorKind> {
        let position = self.position;
        self.position += 1;

        let Some(value) = self.values.next() else {
            return Err(ResolveErrorKind::ArgumentMismatch {
                position,
                expected: TypeInfo::of::<T>(),
                actual: None,
            });
        };

        match value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(ResolveErrorKind::ArgumentMismatch {
                position,
                expected: TypeInfo::of::<T>(),
                actual: Some((*value).type_id()),
            }),
        }
    }

    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

/// Ordered list of constructor parameters.
///
/// Implemented for tuples of up to 16 elements, every element is resolved by its own type.
pub trait Parameters: Sized {
    /// Parameter types in declaration order, `None` if there are no parameters.
    fn type_infos() -> Option<Box<[TypeInfo]>>;

    /// Unpacks the parameters from resolved arguments.
    ///
    /// # Errors
    /// Returns [`ResolveErrorKind::ArgumentMismatch`] if the arguments don't match the parameters
    fn from_arguments(arguments: &mut Arguments) -> Result<Self, ResolveErrorKind>;
}

macro_rules! impl_parameters {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case)]
        impl<$($ty,)*> Parameters for ($($ty,)*)
        where
            $( $ty: 'static, )*
        {
            #[allow(unused_mut)]
            fn type_infos() -> Option<Box<[TypeInfo]>> {
                let mut type_infos: Vec<TypeInfo> = Vec::new();
                $( type_infos.push(TypeInfo::of::<$ty>()); )*

                if type_infos.is_empty() {
                    None
                } else {
                    Some(type_infos.into_boxed_slice())
                }
            }

            #[inline]
            #[allow(unused_variables)]
            fn from_arguments(arguments: &mut Arguments) -> Result<Self, ResolveErrorKind> {
                let parameters = ($( arguments.take::<$ty>()?, )*);

                let remaining = arguments.remaining();
                if remaining > 0 {
                    warn!(remaining, "Unused arguments");
                }

                Ok(parameters)
            }
        }
    };
}

all_the_tuples!(impl_parameters);

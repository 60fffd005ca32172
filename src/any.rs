use alloc::{boxed::Box, vec::Vec};
use core::{
    any::{type_name, TypeId},
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    ops::Deref,
};

/// Identity of a type used both as a registry key and as a dependency reference.
///
/// Two infos are equal when they describe the same type, the name is only used for diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub name: &'static str,
    pub id: TypeId,
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl PartialOrd for TypeInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl TypeInfo {
    #[inline]
    #[must_use]
    pub fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    #[inline]
    #[must_use]
    pub fn is<T>(&self) -> bool
    where
        T: ?Sized + 'static,
    {
        self.id == TypeId::of::<T>()
    }
}

impl Display for TypeInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Ordered sequence of types, e.g. the chain of requests that led to a failure or a dependency cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeChain(Box<[TypeInfo]>);

impl TypeChain {
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[TypeInfo] {
        &self.0
    }
}

impl Deref for TypeChain {
    type Target = [TypeInfo];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<TypeInfo>> for TypeChain {
    fn from(value: Vec<TypeInfo>) -> Self {
        Self(value.into_boxed_slice())
    }
}

impl From<&[TypeInfo]> for TypeChain {
    fn from(value: &[TypeInfo]) -> Self {
        Self(value.into())
    }
}

impl Display for TypeChain {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        for (index, type_info) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{type_info}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::{TypeChain, TypeInfo};

    use alloc::{string::ToString as _, vec};

    struct A;
    struct B;

    #[test]
    fn test_equality_by_id() {
        assert_eq!(TypeInfo::of::<A>(), TypeInfo::of::<A>());
        assert_ne!(TypeInfo::of::<A>(), TypeInfo::of::<B>());
        assert!(TypeInfo::of::<A>().is::<A>());
        assert!(!TypeInfo::of::<A>().is::<B>());
    }

    #[test]
    fn test_chain_display() {
        let chain = TypeChain::from(vec![TypeInfo::of::<A>(), TypeInfo::of::<B>(), TypeInfo::of::<A>()]);
        let a = TypeInfo::of::<A>().name;
        let b = TypeInfo::of::<B>().name;

        assert_eq!(chain.to_string(), alloc::format!("{a} -> {b} -> {a}"));
        assert_eq!(chain.len(), 3);
        assert_eq!(TypeChain::default().to_string(), "<root>");
    }
}

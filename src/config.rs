/// What to do when two declarations provide the same type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// The later declaration replaces the earlier one.
    #[default]
    Replace,
    /// Building the injector fails with [`crate::BuildErrorKind::DuplicateBinding`].
    Reject,
}

/// Config for an injector
/// ## Fields
/// - `on_duplicate`:
///   How to handle a type that is provided by more than one declaration.
///   By default the last registration wins.
///
/// - `validate`:
///   If `true`, the registry is checked right after it's built:
///   every declared dependency must be provided and the dependency graph must be acyclic.
///
///   This does **not** invoke any provider, only the declared metadata is inspected.
///   Without validation the same problems are reported by [`crate::Injector::get`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub on_duplicate: DuplicatePolicy,
    pub validate: bool,
}

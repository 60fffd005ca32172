use alloc::{
    collections::{btree_map, BTreeMap, BTreeSet},
    sync::Arc,
    vec::Vec,
};
use tracing::{debug, error, info_span, warn};

use crate::{
    any::TypeInfo,
    config::{Config, DuplicatePolicy},
    declaration::{ClassDeclaration, Declaration, ModuleDeclaration, Role},
    errors::BuildErrorKind,
    instantiator::{shared_provider, SharedProvider},
    metadata::TypeMetadata,
};

pub(crate) struct ProviderData {
    pub(crate) provider: SharedProvider,
    pub(crate) dependencies: Option<Arc<[TypeInfo]>>,
    /// Class or module that registered the provider
    pub(crate) declared_by: TypeInfo,
}

#[derive(Default)]
pub(crate) struct Registry {
    entries: BTreeMap<TypeInfo, ProviderData>,
}

impl Registry {
    /// Builds the registry from declarations in their order.
    /// No provider is invoked here.
    pub(crate) fn build<I, Meta>(declarations: I, config: Config, metadata: &Meta) -> Result<Self, BuildErrorKind>
    where
        I: IntoIterator<Item = Declaration>,
        Meta: TypeMetadata + ?Sized,
    {
        let span = info_span!("build");
        let _guard = span.enter();

        let mut registry = Self::default();
        for declaration in declarations {
            let reported = if metadata.is_module(&declaration) {
                Role::Module
            } else {
                Role::Injectable
            };
            if reported != declaration.role() {
                let err = BuildErrorKind::MalformedDeclaration {
                    type_info: declaration.type_info(),
                    declared: declaration.role(),
                    reported,
                };
                error!("{}", err);
                return Err(err);
            }

            match declaration {
                Declaration::Module(module) => registry.process_module(&module, config, metadata)?,
                Declaration::Class(class) => registry.process_class(class, config, metadata)?,
            }
        }

        if config.validate {
            registry.validate()?;
            debug!("Validated");
        }

        debug!(providers = registry.entries.len(), "Built");
        Ok(registry)
    }

    fn process_module<Meta>(&mut self, module: &ModuleDeclaration, config: Config, metadata: &Meta) -> Result<(), BuildErrorKind>
    where
        Meta: TypeMetadata + ?Sized,
    {
        for method in module.methods() {
            let provides = metadata.return_type(module, method);
            let dependencies: Option<Arc<[TypeInfo]>> = metadata.method_parameter_types(module, method).map(Arc::from);

            self.insert(
                provides,
                ProviderData {
                    provider: shared_provider(method.invoke.clone(), dependencies.clone()),
                    dependencies,
                    declared_by: module.type_info(),
                },
                config,
            )?;
            debug!(module = module.type_info().name, method = method.name(), provides = provides.name, "Registered");
        }
        Ok(())
    }

    fn process_class<Meta>(&mut self, class: ClassDeclaration, config: Config, metadata: &Meta) -> Result<(), BuildErrorKind>
    where
        Meta: TypeMetadata + ?Sized,
    {
        let provides = class.type_info();
        let dependencies: Option<Arc<[TypeInfo]>> = metadata.parameter_types(&class).map(Arc::from);

        self.insert(
            provides,
            ProviderData {
                provider: shared_provider(class.constructor, dependencies.clone()),
                dependencies,
                declared_by: provides,
            },
            config,
        )?;
        debug!(provides = provides.name, "Registered");
        Ok(())
    }

    fn insert(&mut self, type_info: TypeInfo, data: ProviderData, config: Config) -> Result<(), BuildErrorKind> {
        match self.entries.entry(type_info) {
            btree_map::Entry::Vacant(entry) => {
                entry.insert(data);
            }
            btree_map::Entry::Occupied(mut entry) => match config.on_duplicate {
                DuplicatePolicy::Replace => {
                    warn!(
                        provides = type_info.name,
                        previous = entry.get().declared_by.name,
                        current = data.declared_by.name,
                        "Binding replaced"
                    );
                    entry.insert(data);
                }
                DuplicatePolicy::Reject => {
                    let err = BuildErrorKind::DuplicateBinding {
                        type_info,
                        previous: entry.get().declared_by,
                        current: data.declared_by,
                    };
                    error!("{}", err);
                    return Err(err);
                }
            },
        }
        Ok(())
    }
}

impl Registry {
    #[inline]
    pub(crate) fn get(&self, type_info: &TypeInfo) -> Option<&ProviderData> {
        self.entries.get(type_info)
    }

    #[inline]
    pub(crate) fn type_infos(&self) -> impl Iterator<Item = TypeInfo> + '_ {
        self.entries.keys().copied()
    }

    pub(crate) fn validate(&self) -> Result<(), BuildErrorKind> {
        for (type_info, ProviderData { dependencies, .. }) in &self.entries {
            for dependency in dependencies.iter().flat_map(|dependencies| dependencies.iter()) {
                if !self.entries.contains_key(dependency) {
                    let err = BuildErrorKind::MissingDependency {
                        type_info: *type_info,
                        dependency: *dependency,
                    };
                    error!("{}", err);
                    return Err(err);
                }
            }
        }

        self.dfs_detect()
    }

    fn dfs_detect(&self) -> Result<(), BuildErrorKind> {
        let mut visited = BTreeSet::new();
        let mut stack = Vec::new();

        for type_info in self.entries.keys() {
            if self.dfs_visit(*type_info, &mut visited, &mut stack) {
                let err = BuildErrorKind::CyclicDependency { cycle: stack.into() };
                error!("{}", err);
                return Err(err);
            }
        }
        Ok(())
    }

    /// Returns `true` if a cycle is found, `stack` is left holding the cycle with its first type repeated at the end
    fn dfs_visit(&self, type_info: TypeInfo, visited: &mut BTreeSet<TypeInfo>, stack: &mut Vec<TypeInfo>) -> bool {
        if visited.contains(&type_info) {
            return false;
        }
        if let Some(position) = stack.iter().position(|in_progress| *in_progress == type_info) {
            stack.drain(..position);
            stack.push(type_info);
            return true;
        }
        stack.push(type_info);

        if let Some(ProviderData {
            dependencies: Some(dependencies),
            ..
        }) = self.entries.get(&type_info)
        {
            for dependency in dependencies.iter() {
                if self.dfs_visit(*dependency, visited, stack) {
                    return true;
                }
            }
        }

        stack.pop();
        visited.insert(type_info);
        false
    }
}

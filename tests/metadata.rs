use modi::{
    class, declarations, module, BuildErrorKind, ClassDeclaration, Config, Declaration, DeclaredMetadata, DuplicatePolicy, Injector,
    ModuleDeclaration, ProviderMethod, ResolveErrorKind, TypeInfo, TypeMetadata,
};

struct Wires;
struct Engine(#[allow(dead_code)] Wires);

#[derive(Default)]
struct EngineModule;

/// Forgets constructor parameters of every class
struct NoParameters;

impl TypeMetadata for NoParameters {
    fn is_module(&self, declaration: &Declaration) -> bool {
        DeclaredMetadata.is_module(declaration)
    }

    fn parameter_types(&self, _class: &ClassDeclaration) -> Option<Box<[TypeInfo]>> {
        None
    }

    fn return_type(&self, module: &ModuleDeclaration, method: &ProviderMethod) -> TypeInfo {
        DeclaredMetadata.return_type(module, method)
    }

    fn method_parameter_types(&self, module: &ModuleDeclaration, method: &ProviderMethod) -> Option<Box<[TypeInfo]>> {
        DeclaredMetadata.method_parameter_types(module, method)
    }
}

#[test]
fn test_metadata_without_parameters() {
    let injector = Injector::with_metadata(
        declarations![class(|| Ok(Wires)), class(|wires: Wires| Ok(Engine(wires)))],
        Config::default(),
        &NoParameters,
    )
    .unwrap();

    assert!(injector.get::<Wires>().is_ok());
    assert!(matches!(
        injector.get::<Engine>(),
        Err(ResolveErrorKind::ArgumentMismatch { position: 0, expected, actual: None }) if expected == TypeInfo::of::<Wires>()
    ));
}

#[test]
fn test_last_binding_wins() {
    struct Horsepower(u16);

    #[derive(Default)]
    struct TunedModule;

    let injector = Injector::new(declarations![
        class(|| Ok(Horsepower(100))),
        module::<TunedModule>().provide("horsepower", |_: TunedModule| Ok(Horsepower(300))),
    ])
    .unwrap();

    assert_eq!(injector.get::<Horsepower>().unwrap().0, 300);
}

#[test]
fn test_reject_duplicate_binding() {
    let result = Injector::with_config(
        declarations![
            class(|| Ok(Wires)),
            module::<EngineModule>().provide("wires", |_: EngineModule| Ok(Wires)),
        ],
        Config {
            on_duplicate: DuplicatePolicy::Reject,
            ..Config::default()
        },
    );

    assert!(matches!(
        result,
        Err(BuildErrorKind::DuplicateBinding { type_info, previous, current })
            if type_info == TypeInfo::of::<Wires>() && previous == TypeInfo::of::<Wires>() && current == TypeInfo::of::<EngineModule>()
    ));
}

#[test]
fn test_validation_passes_for_complete_graph() {
    let injector = Injector::with_config(
        declarations![
            module::<EngineModule>().provide("engine", |_: EngineModule, wires: Wires| Ok(Engine(wires))),
            class(|| Ok(Wires)),
        ],
        Config {
            validate: true,
            ..Config::default()
        },
    )
    .unwrap();

    assert!(injector.get::<Engine>().is_ok());
}

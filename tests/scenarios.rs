use modi::{class, declarations, module, Injector, ResolveErrorKind, TypeInfo};

#[test]
fn test_single_dependency() {
    struct Engine;
    struct Car {
        engine: Engine,
    }

    let injector = Injector::new(declarations![class(|| Ok(Engine)), class(|engine: Engine| Ok(Car { engine }))]).unwrap();

    let Car { engine: Engine } = injector.get::<Car>().unwrap();
}

#[test]
fn test_multiple_dependencies() {
    struct Engine;
    struct Windshield;
    struct Car {
        engine: Engine,
        windshield: Windshield,
    }

    let injector = Injector::new(declarations![
        class(|| Ok(Engine)),
        class(|| Ok(Windshield)),
        class(|engine: Engine, windshield: Windshield| Ok(Car { engine, windshield })),
    ])
    .unwrap();

    let Car {
        engine: Engine,
        windshield: Windshield,
    } = injector.get::<Car>().unwrap();
}

#[test]
fn test_nested_dependencies() {
    struct Wires;
    struct Engine {
        wires: Wires,
    }
    struct Car {
        engine: Engine,
    }

    let injector = Injector::new(declarations![
        class(|wires: Wires| Ok(Engine { wires })),
        class(|| Ok(Wires)),
        class(|engine: Engine| Ok(Car { engine })),
    ])
    .unwrap();

    let Car {
        engine: Engine { wires: Wires },
    } = injector.get::<Car>().unwrap();
}

#[test]
fn test_abstract_dependency_from_module() {
    trait EngineInterface {
        fn run(&self) -> &'static str;
    }

    struct GasEngine;

    impl EngineInterface for GasEngine {
        fn run(&self) -> &'static str {
            "gas-powered"
        }
    }

    #[derive(Default)]
    struct EngineModule;

    impl EngineModule {
        fn engine(&self) -> Box<dyn EngineInterface> {
            Box::new(GasEngine)
        }
    }

    struct Car {
        engine: Box<dyn EngineInterface>,
    }

    let injector = Injector::new(declarations![
        module::<EngineModule>().provide("engine", |module: EngineModule| Ok(module.engine())),
        class(|engine: Box<dyn EngineInterface>| Ok(Car { engine })),
    ])
    .unwrap();

    let car: Car = injector.get().unwrap();
    assert_eq!(car.engine.run(), "gas-powered");
    assert!(!injector.contains::<GasEngine>());
    assert!(matches!(injector.get::<GasEngine>(), Err(ResolveErrorKind::NoProvider { .. })));
}

#[test]
fn test_unregistered_type() {
    struct Engine;
    struct Car;

    let injector = Injector::new(declarations![class(|| Ok(Car))]).unwrap();

    let err = injector.get::<Engine>().err().unwrap();
    assert!(matches!(err, ResolveErrorKind::NoProvider { type_info, .. } if type_info == TypeInfo::of::<Engine>()));
}

#[test]
fn test_mutual_dependency() {
    struct Chicken(#[allow(dead_code)] Box<Egg>);
    struct Egg(#[allow(dead_code)] Box<Chicken>);

    let injector = Injector::new(declarations![
        class(|egg: Egg| Ok(Chicken(Box::new(egg)))),
        class(|chicken: Chicken| Ok(Egg(Box::new(chicken)))),
    ])
    .unwrap();

    let err = injector.get::<Egg>().err().unwrap();
    assert!(matches!(err, ResolveErrorKind::CyclicDependency { .. }));
    assert!(err.to_string().starts_with("Cyclic dependency detected"));
}

#[test]
fn test_injector_is_shared_between_threads() {
    struct Engine(u8);

    let injector = Injector::new(declarations![class(|| Ok(Engine(4)))]).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let injector = injector.clone();
            std::thread::spawn(move || injector.get::<Engine>().map(|engine| engine.0).ok())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(4));
    }
}

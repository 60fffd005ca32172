#[rustfmt::skip]
macro_rules! all_the_tuples {
    ($name:ident) => {
        $name!([]);
        $name!([T1]);
        $name!([T1, T2]);
        $name!([T1, T2, T3]);
        $name!([T1, T2, T3, T4]);
        $name!([T1, T2, T3, T4, T5]);
        $name!([T1, T2, T3, T4, T5, T6]);
        $name!([T1, T2, T3, T4, T5, T6, T7]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9, T10]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15]);
        $name!([T1, T2, T3, T4, T5, T6, T7, T8, T9, T10, T11, T12, T13, T14, T15, T16]);
    };
}

/// Collects class and module declarations of different kinds into a `Vec<Declaration>`.
///
/// # Examples
/// ```rust
/// use modi::{class, declarations, Injector};
///
/// struct Engine;
/// struct Car(Engine);
///
/// let injector = Injector::new(declarations![
///     class(|| Ok(Engine)),
///     class(|engine: Engine| Ok(Car(engine))),
/// ])
/// .unwrap();
///
/// let _car: Car = injector.get().unwrap();
/// ```
#[macro_export]
macro_rules! declarations {
    () => {{
        $crate::__private::Vec::<$crate::Declaration>::new()
    }};
    ( $( $declaration:expr ),+ $(,)? ) => {{
        $crate::__private::Vec::<$crate::Declaration>::from([
            $( $crate::Declaration::from($declaration) ),+
        ])
    }};
}

//! Compiled-out probe stub
//!
//! Selected when the `sdt` feature is off or the target has no emitter.
//! Call sites compile identically to instrumented builds: arguments are
//! still evaluated and type-checked through `MarkerArg`, and a gated marker
//! still requires its semaphore to resolve, so switching the feature on
//! cannot surface new build errors. Everything folds to nothing after
//! optimization.

#[macro_export]
#[doc(hidden)]
macro_rules! _qtrace_sdt {
    (@probe $name:ident, $args_tmpl:literal $(, $arg:expr)*) => {{
        $( let _ = $crate::MarkerArg::to_reg($arg); )*
    }};
    (@probe_sema $name:ident, $args_tmpl:literal $(, $arg:expr)*) => {{
        let _ = &$name;
        $( let _ = $crate::MarkerArg::to_reg($arg); )*
    }};
}

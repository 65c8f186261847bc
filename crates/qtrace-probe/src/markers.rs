//! Marker firing and semaphore management macros
//!
//! The public surface of the facility:
//!
//! - [`define_semaphore!`] / [`declare_semaphore!`] - allocate or import the
//!   observer-interest counter for a gated marker
//! - [`marker!`] - fire an ungated marker
//! - [`marker_with_semaphore!`] - fire a marker tied to its semaphore
//! - [`marker_enabled!`] - cheap pre-check before expensive argument work
//!
//! Marker name plus ordered argument list is the contract tracer scripts
//! depend on. Adding a marker or a trailing argument is backward compatible;
//! reordering, retyping or removing arguments is not.
//!
//! Argument expressions are evaluated unconditionally - the facility never
//! suppresses caller-supplied computation. Gate costly work yourself:
//!
//! ```ignore
//! if marker_enabled!(scan_done) {
//!     let histogram = expensive_histogram(&rows);
//!     marker_with_semaphore!(scan_done, qid, histogram.p99());
//! }
//! ```
//!
//! Each arity arm below supplies the SDT argument layout string for its
//! argument count; the per-architecture `_qtrace_sdt!` emitter fills in the
//! rendered register names.

/// Define the semaphore for a gated marker.
///
/// Allocates a process-wide [`Semaphore`](qtrace_core::Semaphore) in the
/// `.probes` link section under the marker's name. Must appear exactly once
/// per name per binary, outside any function (the expansion is a `pub`
/// item). A second definition with the same name in the same scope fails the
/// build with a duplicate-symbol error, which is the intended failure mode.
#[macro_export]
macro_rules! define_semaphore {
    ($name:ident) => {
        #[used]
        #[link_section = ".probes"]
        #[allow(non_upper_case_globals)]
        pub static $name: $crate::Semaphore = $crate::Semaphore::new();
    };
}

/// Make a semaphore defined in another module or crate visible here.
///
/// No allocation: this re-exports the existing counter so gated markers and
/// [`marker_enabled!`] can reference it by its bare name. Any number of
/// modules may declare the same semaphore.
///
/// ```ignore
/// declare_semaphore!(crate::probes::scan_done);
/// ```
#[macro_export]
macro_rules! declare_semaphore {
    ($sema:path) => {
        #[allow(unused_imports)]
        pub use $sema;
    };
}

/// True iff an observer is attached to the named semaphore.
///
/// Pure relaxed load, safe to call unconditionally. Use it to skip argument
/// computation the tracer would never see.
#[macro_export]
macro_rules! marker_enabled {
    ($sema:path) => {
        $crate::Semaphore::is_active(&$sema)
    };
}

/// Fire an ungated marker with 0..=8 arguments.
///
/// Compiles to a single nop plus a non-loaded ELF note; when no tracer has
/// patched the pad the only runtime cost is pinning the already-evaluated
/// arguments in registers for one instruction.
#[macro_export]
macro_rules! marker {
    ($name:ident $(,)?) => {
        $crate::_qtrace_sdt!(@probe $name, "")
    };
    ($name:ident, $a0:expr $(,)?) => {
        $crate::_qtrace_sdt!(@probe $name, "-8@{}", $a0)
    };
    ($name:ident, $a0:expr, $a1:expr $(,)?) => {
        $crate::_qtrace_sdt!(@probe $name, "-8@{} -8@{}", $a0, $a1)
    };
    ($name:ident, $a0:expr, $a1:expr, $a2:expr $(,)?) => {
        $crate::_qtrace_sdt!(@probe $name, "-8@{} -8@{} -8@{}", $a0, $a1, $a2)
    };
    ($name:ident, $a0:expr, $a1:expr, $a2:expr, $a3:expr $(,)?) => {
        $crate::_qtrace_sdt!(@probe $name, "-8@{} -8@{} -8@{} -8@{}", $a0, $a1, $a2, $a3)
    };
    ($name:ident, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr $(,)?) => {
        $crate::_qtrace_sdt!(@probe $name, "-8@{} -8@{} -8@{} -8@{} -8@{}",
            $a0, $a1, $a2, $a3, $a4)
    };
    ($name:ident, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr $(,)?) => {
        $crate::_qtrace_sdt!(@probe $name, "-8@{} -8@{} -8@{} -8@{} -8@{} -8@{}",
            $a0, $a1, $a2, $a3, $a4, $a5)
    };
    ($name:ident, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr $(,)?) => {
        $crate::_qtrace_sdt!(@probe $name, "-8@{} -8@{} -8@{} -8@{} -8@{} -8@{} -8@{}",
            $a0, $a1, $a2, $a3, $a4, $a5, $a6)
    };
    ($name:ident, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr $(,)?) => {
        $crate::_qtrace_sdt!(@probe $name, "-8@{} -8@{} -8@{} -8@{} -8@{} -8@{} -8@{} -8@{}",
            $a0, $a1, $a2, $a3, $a4, $a5, $a6, $a7)
    };
}

/// Fire a marker tied to its previously defined/declared semaphore.
///
/// Identical to [`marker!`] except the emitted note carries the semaphore's
/// address, so SDT-aware tracers bump the counter on attach and
/// [`marker_enabled!`] becomes meaningful for this marker. The semaphore
/// static named `$name` must be in scope; an unresolved name fails the
/// build.
#[macro_export]
macro_rules! marker_with_semaphore {
    ($name:ident $(,)?) => {
        $crate::_qtrace_sdt!(@probe_sema $name, "")
    };
    ($name:ident, $a0:expr $(,)?) => {
        $crate::_qtrace_sdt!(@probe_sema $name, "-8@{}", $a0)
    };
    ($name:ident, $a0:expr, $a1:expr $(,)?) => {
        $crate::_qtrace_sdt!(@probe_sema $name, "-8@{} -8@{}", $a0, $a1)
    };
    ($name:ident, $a0:expr, $a1:expr, $a2:expr $(,)?) => {
        $crate::_qtrace_sdt!(@probe_sema $name, "-8@{} -8@{} -8@{}", $a0, $a1, $a2)
    };
    ($name:ident, $a0:expr, $a1:expr, $a2:expr, $a3:expr $(,)?) => {
        $crate::_qtrace_sdt!(@probe_sema $name, "-8@{} -8@{} -8@{} -8@{}", $a0, $a1, $a2, $a3)
    };
    ($name:ident, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr $(,)?) => {
        $crate::_qtrace_sdt!(@probe_sema $name, "-8@{} -8@{} -8@{} -8@{} -8@{}",
            $a0, $a1, $a2, $a3, $a4)
    };
    ($name:ident, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr $(,)?) => {
        $crate::_qtrace_sdt!(@probe_sema $name, "-8@{} -8@{} -8@{} -8@{} -8@{} -8@{}",
            $a0, $a1, $a2, $a3, $a4, $a5)
    };
    ($name:ident, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr $(,)?) => {
        $crate::_qtrace_sdt!(@probe_sema $name, "-8@{} -8@{} -8@{} -8@{} -8@{} -8@{} -8@{}",
            $a0, $a1, $a2, $a3, $a4, $a5, $a6)
    };
    ($name:ident, $a0:expr, $a1:expr, $a2:expr, $a3:expr, $a4:expr, $a5:expr, $a6:expr, $a7:expr $(,)?) => {
        $crate::_qtrace_sdt!(@probe_sema $name,
            "-8@{} -8@{} -8@{} -8@{} -8@{} -8@{} -8@{} -8@{}",
            $a0, $a1, $a2, $a3, $a4, $a5, $a6, $a7)
    };
}

#[cfg(test)]
mod tests {
    // Firing a probe in-process is safe: with no tracer attached the pad is
    // a plain nop, so these exercise the real emitters on supported targets
    // and the stub everywhere else.

    crate::define_semaphore!(probe_test_gate);

    mod defining_site {
        crate::define_semaphore!(probe_shared);
    }

    mod declaring_site {
        crate::declare_semaphore!(super::defining_site::probe_shared);
    }

    #[test]
    fn test_fire_without_observer_is_noop() {
        let before = 17u64;
        crate::marker!(probe_test_plain);
        crate::marker!(probe_test_one, 42u64);
        crate::marker!(probe_test_three, 42u64, 3.5f64, 128i32);
        // Surrounding program state is untouched.
        assert_eq!(before, 17);
    }

    #[test]
    fn test_sequential_fires_carry_own_arguments() {
        // Each firing converts its own argument values; there is no shared
        // buffer to alias between the two calls.
        let mut qid = 1u64;
        crate::marker!(probe_test_seq, qid, 10.0f64);
        qid = 2;
        crate::marker!(probe_test_seq, qid, 20.0f64);
        assert_eq!(qid, 2);
    }

    #[test]
    fn test_enabled_tracks_attach_detach() {
        assert!(!crate::marker_enabled!(probe_test_gate));

        probe_test_gate.attach();
        assert!(crate::marker_enabled!(probe_test_gate));
        crate::marker_with_semaphore!(probe_test_gate, 7u64);

        probe_test_gate.detach();
        assert!(!crate::marker_enabled!(probe_test_gate));
        // Firing with the semaphore at zero is still a silent no-op.
        crate::marker_with_semaphore!(probe_test_gate, 8u64);
    }

    #[test]
    fn test_declared_semaphore_is_same_counter() {
        // A declaration re-exports the defining allocation; both paths must
        // resolve to one address.
        assert!(core::ptr::eq(
            &defining_site::probe_shared,
            &declaring_site::probe_shared,
        ));

        defining_site::probe_shared.attach();
        assert!(crate::marker_enabled!(declaring_site::probe_shared));
        declaring_site::probe_shared.detach();
        assert!(!crate::marker_enabled!(defining_site::probe_shared));
    }

    #[test]
    fn test_max_arity() {
        crate::marker!(
            probe_test_wide,
            1u64,
            2u64,
            3u64,
            4u64,
            5u64,
            6u64,
            7u64,
            8u64
        );
    }

    #[test]
    fn test_mixed_argument_types() {
        let width: i32 = -64;
        let selectivity: f64 = 0.25;
        let flag = true;
        crate::marker!(probe_test_mixed, 42u64, selectivity, width, flag);
    }
}

//! # qtrace - Static Tracepoint Markers
//!
//! USDT-style static instrumentation points for a query executor. Markers
//! are named probes under the fixed `qtrace` provider namespace; external
//! tracers (`bpftrace`, `perf probe`, SystemTap) attach to them by name and
//! read argument values out of registers. An unobserved marker costs a
//! single nop.
//!
//! ## Quick Start
//!
//! ```ignore
//! use qtrace::{define_semaphore, marker_enabled, marker_with_features,
//!              marker_with_semaphore, PlanState};
//!
//! // One counter per gated marker, defined once per binary.
//! define_semaphore!(scan_done);
//!
//! fn emit_tuples(plan: &impl PlanState, emitted: u64) {
//!     // Standard features first, caller arguments appended after.
//!     marker_with_features!(tuples_emitted, plan, emitted);
//!
//!     // Pre-check before computing anything costly.
//!     if marker_enabled!(scan_done) {
//!         let p99 = expensive_percentile();
//!         marker_with_semaphore!(scan_done, plan.query_id(), p99);
//!     }
//! }
//! ```
//!
//! Attach from outside with e.g.:
//!
//! ```text
//! bpftrace -e 'usdt:/path/to/bin:qtrace:tuples_emitted { @[arg0] = count(); }'
//! ```
//!
//! ## Contract
//!
//! - Marker name + ordered argument list is the ABI observers depend on.
//!   Adding a marker or a trailing argument is non-breaking; anything else
//!   is breaking.
//! - Argument expressions always evaluate; gate expensive work on
//!   [`marker_enabled!`] yourself.
//! - Firing never fails and never alters program behavior; with no observer
//!   the event is simply not delivered.
//!
//! Builds with the `sdt` feature disabled (or on targets without an
//! emitter) compile every marker to an argument-evaluating stub.

// Re-export core types
pub use qtrace_core::{
    standard_features,
    FeatureSnapshot,
    MarkerArg,
    PlanState,
    Semaphore,
    PROVIDER,
};

// Re-export diagnostic macros and controls
pub use qtrace_core::{tp_debug, tp_error, tp_info};
pub use qtrace_core::diag::{init as init_diag, set_level, DiagLevel};

// Re-export env utilities
pub use qtrace_core::{env_get, env_get_bool};

// Re-export the probe macros
pub use qtrace_probe::probes_enabled;
pub use qtrace_probe::{declare_semaphore, define_semaphore, marker, marker_enabled, marker_with_semaphore};

/// Fire a marker carrying the standard plan-state features.
///
/// Reads `(query_id, estimated_num_rows, estimated_row_width_bytes)` from
/// the plan-state context at the moment of firing and passes them as the
/// marker's first three arguments; caller-supplied extras are appended
/// after, up to five of them.
///
/// The feature reads happen unconditionally, observer or not - they are
/// three cheap field loads, and keeping them unconditional keeps this macro
/// a drop-in for the ungated [`marker!`] path. Use [`marker_enabled!`] +
/// [`marker_with_semaphore!`] when the arguments are genuinely expensive.
#[macro_export]
macro_rules! marker_with_features {
    ($name:ident, $plan:expr $(, $extra:expr)* $(,)?) => {{
        let __features = $crate::standard_features($plan);
        $crate::marker!(
            $name,
            __features.query_id,
            __features.estimated_num_rows,
            __features.estimated_row_width_bytes
            $(, $extra)*
        );
    }};
}

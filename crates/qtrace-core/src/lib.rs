//! # qtrace-core
//!
//! Core types for the qtrace static tracepoint marker facility.
//!
//! This crate is platform-agnostic and contains no inline assembly.
//! The probe emission macros live in `qtrace-probe`.
//!
//! ## Modules
//!
//! - `arg` - Conversion of marker arguments to register-width values
//! - `features` - Standard feature snapshot read from executor plan state
//! - `semaphore` - Observer-interest counter backing gated markers
//! - `diag` - Leveled diagnostic printing macros (never on the fire path)
//! - `env` - Environment variable utilities

#![allow(dead_code)]

pub mod arg;
pub mod features;
pub mod semaphore;
pub mod diag;
pub mod env;

// Re-exports for convenience
pub use arg::MarkerArg;
pub use features::{standard_features, FeatureSnapshot, PlanState};
pub use semaphore::Semaphore;
pub use env::{env_get, env_get_bool};

/// Constants shared by the marker facility
pub mod constants {
    /// Provider namespace under which every marker is registered.
    ///
    /// This is the name tracer scripts attach to; renaming it breaks every
    /// external script. The probe emitters in `qtrace-probe` bake the same
    /// string into the ELF notes and must stay in sync with this constant.
    pub const PROVIDER: &str = "qtrace";

    /// Maximum marker arity supported by the emission macros.
    pub const MAX_MARKER_ARGS: usize = 8;
}

pub use constants::PROVIDER;

//! # qtrace-probe
//!
//! Platform-specific probe emission for the qtrace marker facility.
//!
//! This crate provides:
//! - Marker firing macros (`marker!`, `marker_with_semaphore!`)
//! - Semaphore definition/declaration macros and the enabled check
//! - Per-architecture inline-assembly emitters (`arch/`)
//! - A compiled-out stub for untraceable builds
//!
//! A fired marker expands to one `nop` landing pad plus an ELF note in
//! `.note.stapsdt` describing the pad's address, the optional semaphore
//! address, the provider namespace, the marker name and the argument layout.
//! Tracers (`bpftrace`, `perf probe`, SystemTap, ...) read the notes from the
//! binary and patch the pad when an observer attaches; the untraced process
//! executes only the nop.

#![allow(dead_code)]

pub mod markers;
pub mod arch;

#[cfg(not(all(
    feature = "sdt",
    target_os = "linux",
    any(target_arch = "x86_64", target_arch = "aarch64")
)))]
mod stub;

// Re-exports so `$crate::` paths inside the exported macros resolve here.
pub use qtrace_core::{MarkerArg, Semaphore};

/// True when this build emits real probes rather than stubs.
pub const fn probes_enabled() -> bool {
    cfg!(all(
        feature = "sdt",
        target_os = "linux",
        any(target_arch = "x86_64", target_arch = "aarch64")
    ))
}

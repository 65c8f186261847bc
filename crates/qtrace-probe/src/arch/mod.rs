//! Architecture-specific probe emitters
//!
//! Each supported architecture defines the `_qtrace_sdt!` emitter macro with
//! the same entry patterns; `markers.rs` dispatches to whichever one is
//! compiled in. Unsupported targets fall back to the stub in `stub.rs`.

#[cfg(all(feature = "sdt", target_os = "linux", target_arch = "x86_64"))]
pub mod x86_64;

#[cfg(all(
    feature = "sdt",
    target_os = "linux",
    target_arch = "aarch64",
    not(all(feature = "sdt", target_os = "linux", target_arch = "x86_64"))
))]
pub mod aarch64;

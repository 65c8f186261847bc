//! Leveled diagnostic printing macros
//!
//! Lightweight stderr diagnostics for embedders and the demo tooling. The
//! marker fire path never logs: an unobserved probe must stay a single nop,
//! so these macros are for setup, teardown and tooling code only.
//!
//! # Environment Variables
//!
//! - `QTRACE_LOG_LEVEL=<level>` - 0=off, 1=error, 2=info, 3=debug
//! - `QTRACE_FLUSH=1` - Flush stderr after each line
//!
//! # Usage
//!
//! ```ignore
//! use qtrace_core::{tp_error, tp_info, tp_debug};
//!
//! tp_info!("executor pid {}", std::process::id());
//! tp_debug!("semaphore count now {}", count);
//! ```

use std::io::Write;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Diagnostic verbosity levels
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagLevel {
    Off = 0,
    Error = 1,
    Info = 2,
    Debug = 3,
}

impl DiagLevel {
    pub fn from_u8(v: u8) -> Self {
        match v {
            0 => DiagLevel::Off,
            1 => DiagLevel::Error,
            2 => DiagLevel::Info,
            _ => DiagLevel::Debug,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            DiagLevel::Off => "",
            DiagLevel::Error => "[ERROR]",
            DiagLevel::Info => "[INFO] ",
            DiagLevel::Debug => "[DEBUG]",
        }
    }
}

static LEVEL: AtomicU8 = AtomicU8::new(DiagLevel::Info as u8);
static FLUSH: AtomicBool = AtomicBool::new(false);
static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Initialize diagnostics from environment variables.
///
/// Runs automatically on the first print; call explicitly for deterministic
/// startup.
pub fn init() {
    if INITIALIZED.swap(true, Ordering::SeqCst) {
        return;
    }

    if let Ok(val) = std::env::var("QTRACE_LOG_LEVEL") {
        let level = match val.to_lowercase().as_str() {
            "off" | "0" => DiagLevel::Off,
            "error" | "1" => DiagLevel::Error,
            "info" | "2" => DiagLevel::Info,
            "debug" | "3" => DiagLevel::Debug,
            _ => DiagLevel::Info,
        };
        LEVEL.store(level as u8, Ordering::Relaxed);
    }

    if let Ok(val) = std::env::var("QTRACE_FLUSH") {
        let flush = matches!(val.as_str(), "1" | "true" | "yes" | "on");
        FLUSH.store(flush, Ordering::Relaxed);
    }
}

/// Current diagnostic level
#[inline]
pub fn level() -> DiagLevel {
    if !INITIALIZED.load(Ordering::Relaxed) {
        init();
    }
    DiagLevel::from_u8(LEVEL.load(Ordering::Relaxed))
}

/// Set diagnostic level programmatically
pub fn set_level(level: DiagLevel) {
    INITIALIZED.store(true, Ordering::SeqCst);
    LEVEL.store(level as u8, Ordering::Relaxed);
}

/// Check whether a level would print
#[inline]
pub fn level_enabled(level: DiagLevel) -> bool {
    level as u8 <= self::level() as u8
}

/// Internal: leveled write with stderr lock for atomic lines
#[doc(hidden)]
pub fn _diag_impl(level: DiagLevel, args: std::fmt::Arguments<'_>) {
    if !level_enabled(level) {
        return;
    }
    let stderr = std::io::stderr();
    let mut handle = stderr.lock();
    let _ = write!(handle, "{} ", level.prefix());
    let _ = handle.write_fmt(args);
    let _ = handle.write_all(b"\n");
    if FLUSH.load(Ordering::Relaxed) {
        let _ = handle.flush();
    }
}

/// Error level diagnostic
#[macro_export]
macro_rules! tp_error {
    ($($arg:tt)*) => {{
        $crate::diag::_diag_impl(
            $crate::diag::DiagLevel::Error,
            format_args!($($arg)*)
        );
    }};
}

/// Info level diagnostic
#[macro_export]
macro_rules! tp_info {
    ($($arg:tt)*) => {{
        $crate::diag::_diag_impl(
            $crate::diag::DiagLevel::Info,
            format_args!($($arg)*)
        );
    }};
}

/// Debug level diagnostic
#[macro_export]
macro_rules! tp_debug {
    ($($arg:tt)*) => {{
        $crate::diag::_diag_impl(
            $crate::diag::DiagLevel::Debug,
            format_args!($($arg)*)
        );
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(DiagLevel::Error < DiagLevel::Info);
        assert!(DiagLevel::Info < DiagLevel::Debug);
    }

    #[test]
    fn test_level_from_u8() {
        assert_eq!(DiagLevel::from_u8(0), DiagLevel::Off);
        assert_eq!(DiagLevel::from_u8(1), DiagLevel::Error);
        assert_eq!(DiagLevel::from_u8(2), DiagLevel::Info);
        assert_eq!(DiagLevel::from_u8(77), DiagLevel::Debug);
    }

    #[test]
    fn test_macros_compile() {
        set_level(DiagLevel::Off); // Suppress output during test

        tp_error!("error {}", 1);
        tp_info!("info");
        tp_debug!("debug {:?}", (1, 2));
    }
}

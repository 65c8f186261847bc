//! Environment variable utilities
//!
//! Small helpers for the `QTRACE_*` knobs used by the demo tooling.
//!
//! ```ignore
//! use qtrace_core::env::{env_get, env_get_bool};
//!
//! let rows: u64 = env_get("QTRACE_DEMO_ROWS", 10_000);
//! let spin = env_get_bool("QTRACE_DEMO_SPIN", false);
//! ```

use std::str::FromStr;

/// Get environment variable parsed as type T, or return default.
///
/// Unset and unparsable values both fall back to the default.
#[inline]
pub fn env_get<T>(key: &str, default: T) -> T
where
    T: FromStr,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Get environment variable as boolean.
///
/// Accepts "1", "true", "yes", "on" (case-insensitive) as true; anything
/// else set is false; unset returns the default.
#[inline]
pub fn env_get_bool(key: &str, default: bool) -> bool {
    match std::env::var(key) {
        Ok(val) => matches!(val.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_get_default() {
        let val: u64 = env_get("__QTRACE_TEST_UNSET__", 42);
        assert_eq!(val, 42);
    }

    #[test]
    fn test_env_get_parse_failure_returns_default() {
        std::env::set_var("__QTRACE_TEST_BAD__", "not_a_number");
        let val: u64 = env_get("__QTRACE_TEST_BAD__", 7);
        assert_eq!(val, 7);
        std::env::remove_var("__QTRACE_TEST_BAD__");
    }

    #[test]
    fn test_env_get_set_value() {
        std::env::set_var("__QTRACE_TEST_NUM__", "123");
        let val: u64 = env_get("__QTRACE_TEST_NUM__", 0);
        assert_eq!(val, 123);
        std::env::remove_var("__QTRACE_TEST_NUM__");
    }

    #[test]
    fn test_env_get_bool() {
        assert!(env_get_bool("__QTRACE_TEST_UNSET__", true));
        assert!(!env_get_bool("__QTRACE_TEST_UNSET__", false));

        std::env::set_var("__QTRACE_TEST_FLAG__", "yes");
        assert!(env_get_bool("__QTRACE_TEST_FLAG__", false));
        std::env::set_var("__QTRACE_TEST_FLAG__", "0");
        assert!(!env_get_bool("__QTRACE_TEST_FLAG__", true));
        std::env::remove_var("__QTRACE_TEST_FLAG__");
    }
}

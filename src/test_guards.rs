//! RAII guard for environment variables in tests.
//!
//! Tests that mutate the environment must guarantee restoration even if the
//! test panics. The guard snapshots the variable in `new()` and restores it
//! in `Drop`. Tests using it should still be marked `#[serial]`.

use std::env;
use std::ffi::{OsStr, OsString};

/// RAII guard that restores an environment variable on drop.
pub struct EnvGuard {
    key: String,
    original: Option<OsString>,
}

impl EnvGuard {
    /// Create a new guard that snapshots the current value of `key`.
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            original: env::var_os(key),
        }
    }

    /// Snapshot `key`, then set it to `value`.
    ///
    /// # Safety
    /// Calls `std::env::set_var`; callers must be `#[serial]`.
    pub unsafe fn set(key: &str, value: impl AsRef<OsStr>) -> Self {
        let guard = Self::new(key);
        unsafe { env::set_var(key, value) };
        guard
    }

    /// Snapshot `key`, then remove it.
    ///
    /// # Safety
    /// Calls `std::env::remove_var`; callers must be `#[serial]`.
    pub unsafe fn remove(key: &str) -> Self {
        let guard = Self::new(key);
        unsafe { env::remove_var(key) };
        guard
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: guards are only used from #[serial] tests
        match &self.original {
            Some(val) => unsafe { env::set_var(&self.key, val) },
            None => unsafe { env::remove_var(&self.key) },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_guard_restores_absent_var() {
        let key = "ROSTER_TEST_GUARD_ABSENT";
        {
            let _guard = unsafe { EnvGuard::set(key, "temporary") };
            assert_eq!(env::var(key).unwrap(), "temporary");
        }
        assert!(env::var_os(key).is_none());
    }

    #[test]
    #[serial]
    fn test_env_guard_restores_existing_var() {
        let key = "ROSTER_TEST_GUARD_EXISTING";
        let _outer = unsafe { EnvGuard::set(key, "original") };
        {
            let _guard = unsafe { EnvGuard::remove(key) };
            assert!(env::var_os(key).is_none());
        }
        assert_eq!(env::var(key).unwrap(), "original");
    }
}

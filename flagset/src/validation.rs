//! Process-wide flag validation switch
//!
//! A single switch shared by every [`FlagSet`](crate::FlagSet) of every
//! width. When it is on, single-flag arguments to `add`, `clear` and `has`
//! must be nonzero with exactly one bit set, and a violation panics. When it
//! is off (the default) no check runs at all.
//!
//! The switch is an atomic, so toggling it is never a data race, but there
//! is no ordering relative to operations already running on other threads.
//! Set it once at startup (or around a test) rather than per call.
//!
//! Building with the `always-validate` feature forces validation on
//! regardless of the switch.

use flagset_core::{validate_flag, Flag};
use std::sync::atomic::{AtomicBool, Ordering};

static VALIDATION_ENABLED: AtomicBool = AtomicBool::new(false);

/// Turn flag validation on or off for the whole process
pub fn set_validation_enabled(enabled: bool) {
    let previous = VALIDATION_ENABLED.swap(enabled, Ordering::Relaxed);
    if previous != enabled {
        tracing::debug!(enabled, "flag validation switched");
    }
}

/// Whether single-flag arguments are currently validated
#[inline]
pub fn validation_enabled() -> bool {
    cfg!(feature = "always-validate") || VALIDATION_ENABLED.load(Ordering::Relaxed)
}

/// Enable validation until the returned guard is dropped
///
/// The previous switch value is restored on drop, including during unwinding
/// from a validation panic.
pub fn enable_validation_scoped() -> ValidationGuard {
    let previous = VALIDATION_ENABLED.swap(true, Ordering::Relaxed);
    if !previous {
        tracing::debug!(enabled = true, "flag validation switched");
    }
    ValidationGuard { previous }
}

/// Restores the validation switch when dropped
#[derive(Debug)]
#[must_use = "validation is restored as soon as the guard is dropped"]
pub struct ValidationGuard {
    previous: bool,
}

impl Drop for ValidationGuard {
    fn drop(&mut self) {
        set_validation_enabled(self.previous);
    }
}

/// Check a single-flag argument if validation is enabled
///
/// # Panics
///
/// Panics with the [`FlagError::InvalidFlagValue`](flagset_core::FlagError)
/// message when validation is enabled and `flag` is zero or has more than
/// one bit set. This is a contract violation: fix the call site.
#[inline]
pub fn check_flag<T: Flag>(flag: T) {
    if !validation_enabled() {
        return;
    }
    if let Err(err) = validate_flag(flag) {
        tracing::error!(value = %flag, "invalid flag value");
        panic!("{err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::lock_switch;

    #[test]
    fn test_check_accepts_single_bits() {
        let _lock = lock_switch();
        let _guard = enable_validation_scoped();

        check_flag(1u8);
        check_flag(0x8000u16);
        check_flag(1u64 << 63);
    }

    #[test]
    #[should_panic(expected = "'0' doesn't fall on a bit-boundary")]
    fn test_check_rejects_zero() {
        let _lock = lock_switch();
        let _guard = enable_validation_scoped();

        check_flag(0u32);
    }

    #[test]
    #[should_panic(expected = "'12' doesn't fall on a bit-boundary")]
    fn test_check_rejects_combined_mask() {
        let _lock = lock_switch();
        let _guard = enable_validation_scoped();

        check_flag(12usize);
    }

    #[cfg(not(feature = "always-validate"))]
    #[test]
    fn test_check_is_silent_when_disabled() {
        let _lock = lock_switch();
        set_validation_enabled(false);

        assert!(!validation_enabled());
        check_flag(0u8);
        check_flag(3u8);
    }

    #[cfg(not(feature = "always-validate"))]
    #[test]
    fn test_guard_restores_previous_state() {
        let _lock = lock_switch();
        set_validation_enabled(false);

        {
            let _guard = enable_validation_scoped();
            assert!(validation_enabled());
            {
                let _inner = enable_validation_scoped();
                assert!(validation_enabled());
            }
            // Inner guard restores "enabled", not the default
            assert!(validation_enabled());
        }
        assert!(!validation_enabled());
    }

    #[test]
    fn test_guard_restores_after_panic() {
        let _lock = lock_switch();
        set_validation_enabled(false);

        let result = std::panic::catch_unwind(|| {
            let _guard = enable_validation_scoped();
            check_flag(5u8);
        });

        assert!(result.is_err());
        assert!(!VALIDATION_ENABLED.load(Ordering::Relaxed));
    }
}

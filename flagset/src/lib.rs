//! Flagset - typed bit-flag sets over unsigned integers
//!
//! A [`FlagSet<T>`] holds the union of a group of power-of-two flags in a
//! single unsigned integer `T` (`u8`, `u16`, `u32`, `u64`, `u128` or
//! `usize`).
//!
//! ## Quick Start
//!
//! ```rust
//! use flagset::{flagset, FlagSet};
//!
//! const READ: u8 = 1 << 0;
//! const WRITE: u8 = 1 << 1;
//! const EXEC: u8 = 1 << 2;
//!
//! let mut perms: FlagSet<u8> = flagset![READ];
//! perms.add(EXEC, &[]);
//! assert!(perms.has_all(READ, &[EXEC]));
//!
//! let perms = perms.merge(flagset![WRITE]);
//! assert_eq!(perms.all().collect::<Vec<_>>(), [READ, WRITE, EXEC]);
//! ```
//!
//! ## Validation
//!
//! Passing zero or a combined mask where a single flag is expected is a
//! programming error. It is caught only when validation is switched on,
//! either at runtime with [`set_validation_enabled`] or at build time with
//! the `always-validate` feature. A caught violation panics with
//! [`FlagError::InvalidFlagValue`]; it is not meant to be recovered from.
//!
//! ```rust,should_panic
//! use flagset::{set_validation_enabled, FlagSet};
//!
//! set_validation_enabled(true);
//! let mut flags = FlagSet::<u8>::empty();
//! flags.add(3, &[]); // panics: '3' doesn't fall on a bit-boundary
//! ```

// Re-export core abstractions
pub use flagset_core::{
    // Width capability
    Flag,
    // Error handling
    FlagError, Result,
    // Pure checks
    is_single_flag, validate_flag, validate_flags,
};

pub mod iter;
pub mod set;
pub mod validation;

pub use iter::Iter;
pub use set::FlagSet;
pub use validation::{
    check_flag, enable_validation_scoped, set_validation_enabled, validation_enabled,
    ValidationGuard,
};

/// Build a [`FlagSet`] from a list of flags
///
/// `flagset![a, b, c]` is `FlagSet::new(a, &[b, c])`; `flagset![]` is the
/// empty set.
#[macro_export]
macro_rules! flagset {
    () => {
        $crate::FlagSet::empty()
    };
    ($flag:expr $(, $extra:expr)* $(,)?) => {
        $crate::FlagSet::new($flag, &[$($extra),*])
    };
}

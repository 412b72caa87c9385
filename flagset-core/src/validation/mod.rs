//! Flag validation utilities
//!
//! Pure checks with no global state. Whether a failed check aborts is
//! decided by the caller.

pub mod power;

pub use power::{is_single_flag, validate_flag, validate_flags};

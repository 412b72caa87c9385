//! Error types for flag set operations

/// Errors that can occur when a value is used as a single flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagError {
    /// The value is zero or has more than one bit set.
    ///
    /// Carries the offending value widened to `u128` so every flag width
    /// shares one error type.
    InvalidFlagValue(u128),
}

impl FlagError {
    /// The offending value, widened to `u128`
    pub const fn value(&self) -> u128 {
        match self {
            FlagError::InvalidFlagValue(value) => *value,
        }
    }
}

impl core::fmt::Display for FlagError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FlagError::InvalidFlagValue(value) => {
                write!(f, "'{value}' doesn't fall on a bit-boundary")
            }
        }
    }
}

impl core::error::Error for FlagError {}

/// Result type for flag validation
pub type Result<T> = core::result::Result<T, FlagError>;

//! Single-bit validation for flag arguments

use crate::{Flag, FlagError};

/// Check that a value is a single flag: nonzero with exactly one bit set
#[inline]
pub fn is_single_flag<T: Flag>(flag: T) -> bool {
    !flag.is_zero() && flag.without_lowest_bit().is_zero()
}

/// Validate that a value is a single flag
///
/// Zero and pre-combined masks are rejected with
/// [`FlagError::InvalidFlagValue`] carrying the value.
pub fn validate_flag<T: Flag>(flag: T) -> Result<(), FlagError> {
    if !is_single_flag(flag) {
        return Err(FlagError::InvalidFlagValue(flag.widen()));
    }
    Ok(())
}

/// Validate every value in a slice, reporting the first offender
pub fn validate_flags<T: Flag>(flags: &[T]) -> Result<(), FlagError> {
    for &flag in flags {
        validate_flag(flag)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_single_flag() {
        assert!(is_single_flag(1u8));
        assert!(is_single_flag(0x80u8));
        assert!(is_single_flag(1u128 << 100));

        assert!(!is_single_flag(0u8));
        assert!(!is_single_flag(3u8));
        assert!(!is_single_flag(6u32));
        assert!(!is_single_flag(usize::MAX));
    }

    #[test]
    fn test_validate_flag() {
        assert_eq!(validate_flag(4u16), Ok(()));
        assert_eq!(validate_flag(0u16), Err(FlagError::InvalidFlagValue(0)));
        assert_eq!(validate_flag(5u64), Err(FlagError::InvalidFlagValue(5)));
    }

    #[test]
    fn test_validate_flags_first_offender() {
        assert_eq!(validate_flags::<u8>(&[]), Ok(()));
        assert_eq!(validate_flags(&[1u8, 2, 4]), Ok(()));
        assert_eq!(
            validate_flags(&[1u8, 6, 0]),
            Err(FlagError::InvalidFlagValue(6))
        );
    }
}

//! Conversion of caller-supplied positions into checked indices

use crate::error::{Error, Result};

/// A row or column position as supplied by the caller
///
/// Unsigned integers always convert. Signed integers convert when they are
/// not negative; a negative value is reported as [`Error::NegativeIndex`]
/// instead of being clamped.
///
/// ```
/// use odsgen_core::IntoIndex;
///
/// assert_eq!(3usize.into_index().unwrap(), 3);
/// assert_eq!(7i32.into_index().unwrap(), 7);
/// assert!((-1i64).into_index().is_err());
/// ```
pub trait IntoIndex: Copy {
    /// Convert into a non-negative index
    fn into_index(self) -> Result<usize>;
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl IntoIndex for $t {
                fn into_index(self) -> Result<usize> {
                    usize::try_from(self).map_err(|_| Error::other(format!("index {} too large", self)))
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl IntoIndex for $t {
                fn into_index(self) -> Result<usize> {
                    if self < 0 {
                        return Err(Error::NegativeIndex(self as i64));
                    }
                    usize::try_from(self).map_err(|_| Error::other(format!("index {} too large", self)))
                }
            }
        )*
    };
}

impl_unsigned!(usize, u64, u32, u16, u8);
impl_signed!(isize, i64, i32, i16, i8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsigned() {
        assert_eq!(0u8.into_index().unwrap(), 0);
        assert_eq!(1024u16.into_index().unwrap(), 1024);
        assert_eq!(100_000u32.into_index().unwrap(), 100_000);
    }

    #[test]
    fn test_negative_is_rejected() {
        assert!(matches!((-1i32).into_index(), Err(Error::NegativeIndex(-1))));
        assert!(matches!(
            (-42isize).into_index(),
            Err(Error::NegativeIndex(-42))
        ));
        assert_eq!(0i64.into_index().unwrap(), 0);
    }
}

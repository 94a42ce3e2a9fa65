//! Numeric element constraint used by the aggregation methods.

use std::ops::Add;

/// Element types that can be summed and averaged.
///
/// Implemented for all primitive integer and floating point types.
/// Averages and medians are computed in `f64`.
///
/// # Examples
///
/// ```rust
/// use collecta::Numeric;
///
/// assert_eq!(<i32 as Numeric>::ZERO, 0);
/// assert_eq!(7_u8.to_f64(), 7.0);
/// ```
pub trait Numeric: Copy + PartialOrd + Add<Output = Self> {
    /// The additive identity.
    const ZERO: Self;

    /// Converts the value to `f64`, possibly losing precision for wide integers.
    fn to_f64(self) -> f64;

    /// Adds `other`, wrapping around at the bounds of integer types.
    fn wrapping_add(self, other: Self) -> Self;
}

macro_rules! impl_numeric {
    (integer: $($numeric:ty),* $(,)?) => {
        $(
            impl_numeric!(@impl $numeric, 0, <$numeric>::wrapping_add);
        )*
    };
    (float: $($numeric:ty),* $(,)?) => {
        $(
            impl_numeric!(@impl $numeric, 0.0, <$numeric as Add>::add);
        )*
    };
    (@impl $numeric:ty, $zero:expr, $add:expr) => {
        impl Numeric for $numeric {
            const ZERO: Self = $zero;

            #[inline]
            #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn wrapping_add(self, other: Self) -> Self {
                ($add)(self, other)
            }
        }
    };
}

impl_numeric!(integer: i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric!(float: f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    macro_rules! zero_and_conversion_tests {
        ($($numeric:ty),*) => {
            paste::paste! {
                $(
                    #[rstest]
                    fn [<test_zero_and_to_f64_ $numeric>]() {
                        let zero = <$numeric as Numeric>::ZERO;
                        assert_eq!(zero.to_f64(), 0.0);
                        assert_eq!((zero + (3 as $numeric)).to_f64(), 3.0);
                    }
                )*
            }
        };
    }

    zero_and_conversion_tests!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

    #[rstest]
    #[case(i32::MAX, 1, i32::MIN)]
    #[case(-1, 2, 1)]
    fn test_wrapping_add_integers(#[case] left: i32, #[case] right: i32, #[case] expected: i32) {
        assert_eq!(left.wrapping_add(right), expected);
        assert_eq!(Numeric::wrapping_add(left, right), expected);
    }

    #[rstest]
    fn test_wrapping_add_floats() {
        assert_eq!(Numeric::wrapping_add(1.5_f64, 2.25), 3.75);
        assert!(Numeric::wrapping_add(f64::MAX, f64::MAX).is_infinite());
    }
}

//! Per-cell division that can fail.
//!
//! Float division follows IEEE semantics and never fails: a zero divisor gives an
//! infinity or NaN. Integer division fails on a zero divisor and on overflow
//! (`MIN / -1`), reported as `None` instead of a panic.
use num_traits::{CheckedDiv, NumOps};

pub trait Quotient: Copy + NumOps {
    /// `self / rhs`, or `None` when the division is undefined for the type.
    fn quotient(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_float_quotient {
    ($($t:ty),*) => {
        $(
            impl Quotient for $t {
                #[inline]
                fn quotient(self, rhs: Self) -> Option<Self> {
                    Some(self / rhs)
                }
            }
        )*
    };
}

macro_rules! impl_integer_quotient {
    ($($t:ty),*) => {
        $(
            impl Quotient for $t {
                #[inline]
                fn quotient(self, rhs: Self) -> Option<Self> {
                    CheckedDiv::checked_div(&self, &rhs)
                }
            }
        )*
    };
}

impl_float_quotient!(f32, f64);
impl_integer_quotient!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_division_by_zero_is_ieee() {
        assert_eq!(1.0f64.quotient(0.0), Some(f64::INFINITY));
        assert!(0.0f32.quotient(0.0).map_or(false, f32::is_nan));
    }

    #[test]
    fn integer_division_is_checked() {
        assert_eq!(7i32.quotient(2), Some(3));
        assert_eq!(7u8.quotient(0), None);
        assert_eq!(i64::MIN.quotient(-1), None);
    }
}

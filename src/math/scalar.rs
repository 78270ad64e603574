//! Scalar-as-left-operand adapter.
//!
//! A bare number has no matrix-aware behaviour of its own. [`Scalar`] wraps one so
//! that `scalar ⊕ matrix` can be spelled out, and the primitive numeric types get
//! `std::ops` impls against `&Matrix2D` for the same purpose. Addition and
//! multiplication commute; subtraction and division go through the matrix's
//! reverse operations.
use std::ops::{Add, Div, Mul, Neg, Sub};

use num_traits::NumOps;

use crate::error::MatrixError;
use crate::math::element::Quotient;
use crate::math::matrix::Matrix2D;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scalar<T>(pub T);

impl<T> Scalar<T>
where
    T: Copy + NumOps,
{
    pub fn add(self, rhs: &Matrix2D<T>) -> Matrix2D<T> {
        rhs.add_scalar(self.0)
    }

    pub fn multiply(self, rhs: &Matrix2D<T>) -> Matrix2D<T> {
        rhs.multiply_scalar(self.0)
    }

    /// Fails with [`MatrixError::Division`] when an integer cell is zero.
    pub fn divide(self, rhs: &Matrix2D<T>) -> Result<Matrix2D<T>, MatrixError>
    where
        T: Quotient,
    {
        rhs.reverse_divide(self.0)
    }
}

impl<T> Scalar<T>
where
    T: Copy + NumOps + Neg<Output = T>,
{
    pub fn subtract(self, rhs: &Matrix2D<T>) -> Matrix2D<T> {
        rhs.reverse_subtract(self.0)
    }
}

impl<T> From<T> for Scalar<T> {
    fn from(value: T) -> Self {
        Scalar(value)
    }
}

macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl<'a> Add<&'a Matrix2D<$t>> for $t {
                type Output = Matrix2D<$t>;

                fn add(self, rhs: &'a Matrix2D<$t>) -> Self::Output {
                    rhs.add_scalar(self)
                }
            }

            impl<'a> Mul<&'a Matrix2D<$t>> for $t {
                type Output = Matrix2D<$t>;

                fn mul(self, rhs: &'a Matrix2D<$t>) -> Self::Output {
                    rhs.multiply_scalar(self)
                }
            }

            impl<'a> Add<$t> for &'a Matrix2D<$t> {
                type Output = Matrix2D<$t>;

                fn add(self, rhs: $t) -> Self::Output {
                    self.add_scalar(rhs)
                }
            }

            impl<'a> Sub<$t> for &'a Matrix2D<$t> {
                type Output = Matrix2D<$t>;

                fn sub(self, rhs: $t) -> Self::Output {
                    self.subtract_scalar(rhs)
                }
            }

            impl<'a> Mul<$t> for &'a Matrix2D<$t> {
                type Output = Matrix2D<$t>;

                fn mul(self, rhs: $t) -> Self::Output {
                    self.multiply_scalar(rhs)
                }
            }
        )*
    };
}

// Float division never fails, so only floats get the `/` operators. Integer
// callers go through `Matrix2D::divide` or `Scalar::divide`.
macro_rules! impl_scalar_div {
    ($($t:ty),*) => {
        $(
            impl<'a> Div<&'a Matrix2D<$t>> for $t {
                type Output = Matrix2D<$t>;

                fn div(self, rhs: &'a Matrix2D<$t>) -> Self::Output {
                    rhs.map(|x| self / *x)
                }
            }

            impl<'a> Div<$t> for &'a Matrix2D<$t> {
                type Output = Matrix2D<$t>;

                fn div(self, rhs: $t) -> Self::Output {
                    self.divide_scalar(rhs)
                }
            }
        )*
    };
}

// Subtraction needs negation, so unsigned types only get the other three.
macro_rules! impl_scalar_sub {
    ($($t:ty),*) => {
        $(
            impl<'a> Sub<&'a Matrix2D<$t>> for $t {
                type Output = Matrix2D<$t>;

                fn sub(self, rhs: &'a Matrix2D<$t>) -> Self::Output {
                    rhs.reverse_subtract(self)
                }
            }
        )*
    };
}

impl_scalar_ops!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
impl_scalar_sub!(i8, i16, i32, i64, isize, f32, f64);
impl_scalar_div!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtract_is_scalar_minus_matrix() {
        let m: Matrix2D<i32> = Matrix2D::new(vec![vec![0, 1], vec![2, 3]]).unwrap();
        assert_eq!(Scalar(5).subtract(&m).to_nested(), vec![vec![5, 4], vec![3, 2]]);
        assert_eq!((5 - &m).to_nested(), vec![vec![5, 4], vec![3, 2]]);
    }

    #[test]
    fn unsigned_left_operand_commutes() {
        let m = Matrix2D::new(vec![vec![1u8, 2]]).unwrap();
        assert_eq!((3u8 + &m).to_vec(), vec![4, 5]);
        assert_eq!((3u8 * &m).to_vec(), vec![3, 6]);
    }

    #[test]
    fn integer_divide_by_zero_cell_fails() {
        let m = Matrix2D::new(vec![vec![0, 1]]).unwrap();
        let err = Scalar(5).divide(&m).unwrap_err();
        assert_eq!(err, MatrixError::Division { row: 0, col: 0 });
    }
}

use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};
use std::slice::Iter;

use num_traits::{Float, NumOps};
use serde::{Deserialize, Serialize};

use crate::config::PrintOptions;
use crate::error::MatrixError;
use crate::math::element::Quotient;
use crate::math::operand::Operand;
use crate::utils::logging::format_matrix;

/// Rectangular, row-major grid of values.
///
/// A `Matrix2D` is immutable once built: every arithmetic operation returns a
/// fresh matrix and leaves its operands untouched. Shapes always have at least
/// one row and one column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Vec<T>>",
    into = "Vec<Vec<T>>",
    bound(
        serialize = "T: Clone + Serialize",
        deserialize = "T: Deserialize<'de>"
    )
)]
pub struct Matrix2D<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix2D<T> {
    /// Build a matrix from a non-empty sequence of non-empty rows of equal length.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let nrows = rows.len();
        let ncols = match rows.first() {
            None => return Err(MatrixError::shape("no rows")),
            Some(first) if first.is_empty() => return Err(MatrixError::shape("empty first row")),
            Some(first) => first.len(),
        };
        if let Some(idx) = rows.iter().position(|row| row.len() != ncols) {
            return Err(MatrixError::shape(format!(
                "row {} has {} elements, expected {}",
                idx,
                rows[idx].len(),
                ncols
            )));
        }

        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
    }

    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, MatrixError> {
        let (rows, cols) = shape;
        if rows == 0 || cols == 0 {
            return Err(MatrixError::shape(format!(
                "dimensions must be positive, got ({}, {})",
                rows, cols
            )));
        }
        if data.len() != rows * cols {
            return Err(MatrixError::shape(format!(
                "invalid shape ({}, {}) for buffer of length {}",
                rows,
                cols,
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Copy constructor.
    pub fn from_matrix(other: &Matrix2D<T>) -> Self
    where
        T: Clone,
    {
        other.clone()
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            Some(&self.data[self.offset(row, col)])
        } else {
            None
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Rows as nested vectors, in input order.
    pub fn to_nested(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.data.chunks(self.cols).map(<[T]>::to_vec).collect()
    }

    /// Text rendering with explicit print options.
    pub fn format_with(&self, options: &PrintOptions) -> String
    where
        T: fmt::Display,
    {
        format_matrix(self, options)
    }

    // Execution paths. Each builds a new matrix of the same shape, visiting
    // cells in row-major order.

    fn unary_operation<U, F>(&self, op: F) -> Matrix2D<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix2D {
            data: self.data.iter().map(op).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn scalar_operation<U, F>(&self, mut op: F, scalar: &T) -> Matrix2D<U>
    where
        F: FnMut(&T, &T) -> U,
    {
        self.unary_operation(|cell| op(cell, scalar))
    }

    fn element_wise_operation<S, U, F>(
        &self,
        mut op: F,
        other: Operand<'_, S>,
    ) -> Result<Matrix2D<U>, MatrixError>
    where
        S: Clone,
        F: FnMut(&T, &S) -> U,
    {
        let other = other.into_matrix()?;
        if other.shape() != self.shape() {
            log::debug!(
                "rejecting element-wise operation between {:?} and {:?}",
                self.shape(),
                other.shape()
            );
            return Err(MatrixError::ShapeMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        Ok(Matrix2D {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| op(a, b))
                .collect(),
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Pick the execution path from the operand kind and run `op` through it.
    fn dispatch_scalarity<U, F>(
        &self,
        op_name: &str,
        other: Operand<'_, T>,
        op: F,
    ) -> Result<Matrix2D<U>, MatrixError>
    where
        T: Clone,
        F: FnMut(&T, &T) -> U,
    {
        log::trace!("{}: dispatching against {}", op_name, other.describe());
        match other {
            Operand::Nested(_) | Operand::Matrix(_) | Operand::Malformed(_) => {
                self.element_wise_operation(op, other)
            }
            Operand::Scalar(scalar) => Ok(self.scalar_operation(op, &scalar)),
            Operand::Unsupported(repr) => {
                log::debug!("{}: unsupported operand `{}`", op_name, repr);
                Err(MatrixError::UnsupportedOperand(repr))
            }
        }
    }

    /// Apply `f` to every cell. Works for any element type.
    pub fn map<U, F>(&self, f: F) -> Matrix2D<U>
    where
        F: FnMut(&T) -> U,
    {
        self.unary_operation(f)
    }

    /// Combine corresponding cells of `self` and `other` with `f`.
    ///
    /// `other` is always taken element-wise: a scalar operand fails with a shape
    /// error, a matrix of another shape with a shape mismatch.
    pub fn map_with<'a, S, U, F>(
        &self,
        other: impl Into<Operand<'a, S>>,
        f: F,
    ) -> Result<Matrix2D<U>, MatrixError>
    where
        S: Clone + 'a,
        F: FnMut(&T, &S) -> U,
    {
        self.element_wise_operation(f, other.into())
    }

    /// `true` iff every cell compares equal to the corresponding cell (or scalar).
    pub fn equals<'a>(&self, other: impl Into<Operand<'a, T>>) -> Result<bool, MatrixError>
    where
        T: Clone + PartialEq + 'a,
    {
        let res = self.dispatch_scalarity("equals", other.into(), |a, b| a == b)?;
        Ok(res.data.iter().all(|&cell| cell))
    }
}

impl<T> Matrix2D<T>
where
    T: Copy + NumOps,
{
    pub fn add<'a>(&self, other: impl Into<Operand<'a, T>>) -> Result<Self, MatrixError>
    where
        T: 'a,
    {
        self.dispatch_scalarity("add", other.into(), |a, b| *a + *b)
    }

    pub fn subtract<'a>(&self, other: impl Into<Operand<'a, T>>) -> Result<Self, MatrixError>
    where
        T: 'a,
    {
        self.dispatch_scalarity("subtract", other.into(), |a, b| *a - *b)
    }

    /// Element-wise (Hadamard) product, not a matrix product.
    pub fn multiply<'a>(&self, other: impl Into<Operand<'a, T>>) -> Result<Self, MatrixError>
    where
        T: 'a,
    {
        self.dispatch_scalarity("multiply", other.into(), |a, b| *a * *b)
    }

    /// Float division by zero yields infinities or NaN per cell. Integer division
    /// by zero fails with [`MatrixError::Division`].
    pub fn divide<'a>(&self, other: impl Into<Operand<'a, T>>) -> Result<Self, MatrixError>
    where
        T: Quotient + 'a,
    {
        self.dispatch_scalarity("divide", other.into(), |a, b| (*a).quotient(*b))?
            .transpose_cells()
    }

    /// `scalar / cell` for every cell.
    pub fn reverse_divide(&self, scalar: T) -> Result<Self, MatrixError>
    where
        T: Quotient,
    {
        self.unary_operation(|x| scalar.quotient(*x)).transpose_cells()
    }

    pub(crate) fn add_scalar(&self, scalar: T) -> Self {
        self.scalar_operation(|a, b| *a + *b, &scalar)
    }

    pub(crate) fn multiply_scalar(&self, scalar: T) -> Self {
        self.scalar_operation(|a, b| *a * *b, &scalar)
    }

    pub(crate) fn subtract_scalar(&self, scalar: T) -> Self {
        self.scalar_operation(|a, b| *a - *b, &scalar)
    }

    pub(crate) fn divide_scalar(&self, scalar: T) -> Self {
        self.scalar_operation(|a, b| *a / *b, &scalar)
    }
}

impl<T> Matrix2D<T>
where
    T: Copy + NumOps + Neg<Output = T>,
{
    pub fn negate(&self) -> Self {
        self.unary_operation(|x| -*x)
    }

    /// `scalar - cell` for every cell.
    pub fn reverse_subtract(&self, scalar: T) -> Self {
        self.negate().add_scalar(scalar)
    }
}

impl<T> Matrix2D<Option<T>> {
    /// Unwrap every cell, failing on the first empty one in row-major order.
    fn transpose_cells(self) -> Result<Matrix2D<T>, MatrixError> {
        let cols = self.cols;
        let mut data = Vec::with_capacity(self.data.len());
        for (idx, cell) in self.data.into_iter().enumerate() {
            match cell {
                Some(value) => data.push(value),
                None => {
                    let (row, col) = (idx / cols, idx % cols);
                    log::debug!("divide: undefined quotient at cell ({}, {})", row, col);
                    return Err(MatrixError::Division { row, col });
                }
            }
        }
        Ok(Matrix2D {
            data,
            rows: self.rows,
            cols,
        })
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix2D<T> {
    type Error = MatrixError;

    fn try_from(value: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Matrix2D::new(value)
    }
}

impl<T: Clone> From<Matrix2D<T>> for Vec<Vec<T>> {
    fn from(value: Matrix2D<T>) -> Self {
        value.to_nested()
    }
}

impl<T> Index<(usize, usize)> for Matrix2D<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.0 < self.rows && index.1 < self.cols,
            "index {:?} out of bounds for shape {:?}",
            index,
            self.shape()
        );
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix2D<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_matrix(self, &PrintOptions::default()))
    }
}

macro_rules! impl_matrix_binop {
    ($trait:ident, $method:ident, $op:tt, $($bound:tt)+) => {
        impl<'a, 'b, T> $trait<&'b Matrix2D<T>> for &'a Matrix2D<T>
        where
            T: Copy + $($bound)+,
        {
            type Output = Matrix2D<T>;

            fn $method(self, rhs: &'b Matrix2D<T>) -> Self::Output {
                assert_eq!(
                    self.shape(),
                    rhs.shape(),
                    concat!(stringify!($method), " requires matrices of equal shape")
                );
                Matrix2D {
                    data: self
                        .data
                        .iter()
                        .zip(rhs.data.iter())
                        .map(|(a, b)| *a $op *b)
                        .collect(),
                    rows: self.rows,
                    cols: self.cols,
                }
            }
        }
    };
}

impl_matrix_binop!(Add, add, +, Add<Output = T>);
impl_matrix_binop!(Sub, sub, -, Sub<Output = T>);
impl_matrix_binop!(Mul, mul, *, Mul<Output = T>);
// Integer division can fail, so the operator is float-only; use `divide` otherwise.
impl_matrix_binop!(Div, div, /, Float);

impl<'a, T> Neg for &'a Matrix2D<T>
where
    T: Copy + Neg<Output = T>,
{
    type Output = Matrix2D<T>;

    fn neg(self) -> Self::Output {
        self.unary_operation(|x| -*x)
    }
}

impl<T> Neg for Matrix2D<T>
where
    T: Copy + Neg<Output = T>,
{
    type Output = Matrix2D<T>;

    fn neg(self) -> Self::Output {
        -&self
    }
}

//! Classification of right-hand operands.
//!
//! Every arithmetic entry point on [`Matrix2D`] accepts `impl Into<Operand<T>>`.
//! The operand kind decides the execution path: nested sequences (well-formed or
//! not) and matrices go element-wise, plain numbers go through the scalar path,
//! and anything else is rejected with [`MatrixError::UnsupportedOperand`].
use std::borrow::Cow;

use serde_json::Value;

use crate::error::MatrixError;
use crate::math::matrix::Matrix2D;

#[derive(Debug, Clone, PartialEq)]
pub enum Operand<'a, T> {
    Scalar(T),
    Nested(Vec<Vec<T>>),
    Matrix(&'a Matrix2D<T>),
    /// A sequence that is not a sequence of rows, e.g. `[1, 2]`. Goes down the
    /// element-wise path and fails coercion with a shape error.
    Malformed(String),
    /// Rejected operand, holding its string form for the error message.
    Unsupported(String),
}

impl<'a, T> Operand<'a, T> {
    pub fn scalar(value: T) -> Self {
        Operand::Scalar(value)
    }

    pub fn unsupported(repr: impl Into<String>) -> Self {
        Operand::Unsupported(repr.into())
    }

    /// Short description of the operand kind, used in trace logs.
    pub fn describe(&self) -> String {
        match self {
            Operand::Scalar(_) => "scalar".to_string(),
            Operand::Nested(rows) => format!("nested sequence of {} rows", rows.len()),
            Operand::Matrix(m) => format!("matrix of shape {:?}", m.shape()),
            Operand::Malformed(reason) => format!("malformed nested sequence ({})", reason),
            Operand::Unsupported(repr) => format!("unsupported operand `{}`", repr),
        }
    }

    /// Coerce into a matrix for the element-wise path. Nested sequences go through
    /// the validating constructor, so malformed input surfaces as a shape error.
    pub(crate) fn into_matrix(self) -> Result<Cow<'a, Matrix2D<T>>, MatrixError>
    where
        T: Clone,
    {
        match self {
            Operand::Matrix(m) => Ok(Cow::Borrowed(m)),
            Operand::Nested(rows) => Matrix2D::new(rows).map(Cow::Owned),
            Operand::Malformed(reason) => Err(MatrixError::shape(reason)),
            Operand::Scalar(_) => Err(MatrixError::shape("scalar is not a nested sequence")),
            Operand::Unsupported(repr) => Err(MatrixError::UnsupportedOperand(repr)),
        }
    }
}

impl<'a, T> From<&'a Matrix2D<T>> for Operand<'a, T> {
    fn from(value: &'a Matrix2D<T>) -> Self {
        Operand::Matrix(value)
    }
}

impl<'a, T> From<Vec<Vec<T>>> for Operand<'a, T> {
    fn from(value: Vec<Vec<T>>) -> Self {
        Operand::Nested(value)
    }
}

impl<'a, 'b, T: Clone> From<&'b [Vec<T>]> for Operand<'a, T> {
    fn from(value: &'b [Vec<T>]) -> Self {
        Operand::Nested(value.to_vec())
    }
}

impl<'a, T, const R: usize, const C: usize> From<[[T; C]; R]> for Operand<'a, T> {
    fn from(value: [[T; C]; R]) -> Self {
        Operand::Nested(value.into_iter().map(Vec::from).collect())
    }
}

macro_rules! impl_scalar_operand {
    ($($t:ty),*) => {
        $(
            impl<'a> From<$t> for Operand<'a, $t> {
                fn from(value: $t) -> Self {
                    Operand::Scalar(value)
                }
            }
        )*
    };
}

impl_scalar_operand!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Dynamically typed operands. Numbers become scalars and every array takes the
/// element-wise path: arrays of arrays of numbers become nested sequences, arrays
/// with a non-array item are malformed (shape error). Arrays of rows holding
/// non-numeric cells, and all other values, are unsupported.
impl<'a, 'b> From<&'b Value> for Operand<'a, f64> {
    fn from(value: &'b Value) -> Self {
        match value {
            Value::Number(n) => match n.as_f64() {
                Some(x) => Operand::Scalar(x),
                None => Operand::Unsupported(n.to_string()),
            },
            Value::Array(items) => {
                if let Some(idx) = items.iter().position(|item| !item.is_array()) {
                    return Operand::Malformed(format!("item {} is not a row", idx));
                }
                match numeric_rows(items) {
                    Some(rows) => Operand::Nested(rows),
                    None => Operand::Unsupported(js_string(value)),
                }
            }
            other => Operand::Unsupported(js_string(other)),
        }
    }
}

/// An absent value classifies as `undefined`.
impl<'a, 'b> From<Option<&'b Value>> for Operand<'a, f64> {
    fn from(value: Option<&'b Value>) -> Self {
        match value {
            Some(v) => Operand::from(v),
            None => Operand::Unsupported("undefined".to_string()),
        }
    }
}

fn numeric_rows(rows: &[Value]) -> Option<Vec<Vec<f64>>> {
    rows.iter()
        .map(|row| {
            row.as_array()?
                .iter()
                .map(Value::as_f64)
                .collect::<Option<Vec<f64>>>()
        })
        .collect()
}

/// Default object-to-string conversion of a dynamically typed language, so the
/// error text is deterministic per operand kind.
fn js_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Object(_) => "[object Object]".to_string(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => js_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn repr(value: &Value) -> String {
        match Operand::from(value) {
            Operand::Unsupported(repr) => repr,
            other => panic!("expected unsupported operand, got {:?}", other),
        }
    }

    #[test]
    fn json_numbers_are_scalars() {
        assert_eq!(Operand::from(&json!(5)), Operand::Scalar(5.0));
        assert_eq!(Operand::from(&json!(-2.5)), Operand::Scalar(-2.5));
    }

    #[test]
    fn json_nested_arrays_are_nested() {
        let op = Operand::from(&json!([[0, 1], [1, 2]]));
        assert_eq!(op, Operand::Nested(vec![vec![0.0, 1.0], vec![1.0, 2.0]]));
    }

    #[test]
    fn json_ragged_arrays_stay_nested() {
        // shape validation is the constructor's job
        let op = Operand::from(&json!([[0, 1], [1]]));
        assert!(matches!(op, Operand::Nested(_)));
    }

    #[test]
    fn json_stringification_matches_dynamic_defaults() {
        assert_eq!(repr(&json!("lol")), "lol");
        assert_eq!(repr(&json!({})), "[object Object]");
        assert_eq!(repr(&json!({"x": 20})), "[object Object]");
        assert_eq!(repr(&json!(true)), "true");
        assert_eq!(repr(&json!(false)), "false");
        assert_eq!(repr(&Value::Null), "null");
        assert_eq!(repr(&json!([[1, "a", null]])), "1,a,");
    }

    #[test]
    fn json_flat_or_mixed_arrays_are_malformed() {
        for value in [json!([1, 2]), json!([[1, 2], 3])] {
            let op = Operand::from(&value);
            assert!(matches!(op, Operand::Malformed(_)), "got {:?}", op);
            assert!(op.into_matrix().unwrap_err().is_shape());
        }
    }

    #[test]
    fn json_empty_array_is_nested() {
        let op = Operand::from(&json!([]));
        assert_eq!(op, Operand::Nested(vec![]));
        assert!(op.into_matrix().unwrap_err().is_shape());
    }

    #[test]
    fn scalar_constructor_and_slice_conversion() {
        assert_eq!(Operand::scalar(3u8), Operand::Scalar(3u8));
        let rows = vec![vec![1, 2], vec![3, 4]];
        let op = Operand::from(rows.as_slice());
        assert_eq!(op, Operand::Nested(rows.clone()));
    }

    #[test]
    fn absent_value_is_undefined() {
        assert_eq!(
            Operand::<f64>::from(None::<&Value>),
            Operand::Unsupported("undefined".to_string())
        );
    }

    #[test]
    fn scalar_does_not_coerce_to_matrix() {
        let err = Operand::Scalar(5.0).into_matrix().unwrap_err();
        assert!(err.is_shape());
    }

    #[test]
    fn arrays_convert_to_nested() {
        let op: Operand<i32> = [[1, 2, 3]].into();
        assert_eq!(op, Operand::Nested(vec![vec![1, 2, 3]]));
    }
}

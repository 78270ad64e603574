//! matrix2d: a small two-dimensional numeric container.
//!
//! `Matrix2D` supports element-wise and scalar arithmetic with automatic
//! dispatch on the right-hand operand's kind, strict per-cell equality, unary
//! negation and a generic element-mapping primitive. "Multiply" is the
//! element-wise (Hadamard) product; there is no matrix product, inversion or
//! decomposition.
//!
//! Values are immutable: every operation returns a new matrix.
pub mod config;
pub mod error;
pub mod math;
pub mod utils;

pub use config::PrintOptions;
pub use error::MatrixError;
pub use math::{Matrix2D, Operand, Scalar};

//! The `Matrix2D` value type and its operand plumbing.
//!
//! `matrix` holds the container and the dispatcher, `operand` classifies
//! right-hand operands, `scalar` lets a bare number sit on the left of an
//! operator, and `element` provides checked per-cell division.
pub mod element;
pub mod matrix;
pub mod operand;
pub mod scalar;

pub use element::Quotient;
pub use matrix::Matrix2D;
pub use operand::Operand;
pub use scalar::Scalar;

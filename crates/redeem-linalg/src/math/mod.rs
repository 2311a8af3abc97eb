//! Dense vector and matrix types over `f64`.
//!
//! Provides `Matrix` (row-major 2D) and `Vector` (1D) with checked
//! accessors, plus the `rotation` helpers that build rotation matrices and
//! apply them to vectors.
pub mod matrix;
pub mod rotation;
pub mod vector;

pub use matrix::Matrix;
pub use rotation::Axis;
pub use vector::Vector;

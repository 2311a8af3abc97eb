//! redeem-linalg: small dense linear-algebra helpers.
//!
//! This crate provides a `Vector` and a row-major `Matrix` over `f64`, the
//! usual algebra on them (products, elementwise arithmetic, transpose,
//! determinant) and a handful of rotation builders for 2D and 3D vectors.
//!
//! Every operation that can fail on shape or index returns a
//! [`LinalgError`](error::LinalgError) instead of panicking.
pub mod config;
pub mod error;
pub mod math;

pub use error::LinalgError;
pub use math::{Matrix, Vector};

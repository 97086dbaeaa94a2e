//! linearalgebra: small vector and matrix helpers for numeric code.
//!
//! This crate provides owned `Vector` and `Matrix` containers together with
//! element-wise arithmetic, sums and means, dot products, norms, distances,
//! and matrix accessors/constructors. It is meant as a foundation for
//! statistics and gradient-descent style code, not as a BLAS replacement:
//! there is no matrix multiplication, inversion or decomposition.
//!
//! Binary vector operations reject operands of different lengths by default.
//! [`ops::VectorOps`] can be configured with
//! [`config::LengthPolicy::Truncate`] to pair only the overlapping prefix.
pub mod config;
pub mod error;
pub mod math;
pub mod ops;

pub use config::{LengthPolicy, LinalgConfig};
pub use error::{Axis, LinalgError};
pub use math::{Matrix, Vector};
pub use ops::VectorOps;

//! Binary vector operations parameterised by a [`LinalgConfig`].
//!
//! The free functions in [`crate::math::vector`] use the default strict
//! policy. Build a `VectorOps` with [`LengthPolicy::Truncate`] to get
//! shortest-length pairing instead.

use num_traits::{Float, Num};

use crate::config::{LengthPolicy, LinalgConfig};
use crate::error::LinalgError;
use crate::math::vector::{dot_slices, magnitude, scalar_multiply, sum_of_squares, Vector};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VectorOps {
    config: LinalgConfig,
}

impl VectorOps {
    pub fn new(config: LinalgConfig) -> Self {
        Self { config }
    }

    pub fn with_policy(length_policy: LengthPolicy) -> Self {
        Self::new(LinalgConfig::new(length_policy))
    }

    pub fn config(&self) -> &LinalgConfig {
        &self.config
    }

    fn zip_with<T, F>(&self, v: &Vector<T>, w: &Vector<T>, f: F) -> Result<Vector<T>, LinalgError>
    where
        T: Copy,
        F: Fn(T, T) -> T,
    {
        let len = self.config.length_policy.pair_len(v.len(), w.len())?;
        Ok(v.iter()
            .zip(w.iter())
            .take(len)
            .map(|(&a, &b)| f(a, b))
            .collect())
    }

    pub fn add<T: Num + Copy>(
        &self,
        v: &Vector<T>,
        w: &Vector<T>,
    ) -> Result<Vector<T>, LinalgError> {
        self.zip_with(v, w, |a, b| a + b)
    }

    pub fn subtract<T: Num + Copy>(
        &self,
        v: &Vector<T>,
        w: &Vector<T>,
    ) -> Result<Vector<T>, LinalgError> {
        self.zip_with(v, w, |a, b| a - b)
    }

    pub fn sum<T: Num + Copy>(&self, vectors: &[Vector<T>]) -> Result<Vector<T>, LinalgError> {
        let (first, rest) = vectors.split_first().ok_or_else(|| {
            log::debug!("vector_sum called with no vectors");
            LinalgError::EmptyInput {
                operation: "vector_sum",
            }
        })?;
        rest.iter()
            .try_fold(first.clone(), |acc, v| self.add(&acc, v))
    }

    pub fn mean<T: Float>(&self, vectors: &[Vector<T>]) -> Result<Vector<T>, LinalgError> {
        if vectors.is_empty() {
            log::debug!("vector_mean called with no vectors");
            return Err(LinalgError::EmptyInput {
                operation: "vector_mean",
            });
        }
        let total = self.sum(vectors)?;
        let count: T = num_traits::cast(vectors.len()).ok_or_else(|| {
            log::debug!("vector count {} is not representable", vectors.len());
            LinalgError::NotRepresentable {
                value: vectors.len(),
            }
        })?;
        Ok(scalar_multiply(count.recip(), &total))
    }

    pub fn dot<T: Num + Copy>(&self, v: &Vector<T>, w: &Vector<T>) -> Result<T, LinalgError> {
        let len = self.config.length_policy.pair_len(v.len(), w.len())?;
        Ok(dot_slices(&v.as_slice()[..len], &w.as_slice()[..len]))
    }

    pub fn squared_distance<T: Num + Copy>(
        &self,
        v: &Vector<T>,
        w: &Vector<T>,
    ) -> Result<T, LinalgError> {
        Ok(sum_of_squares(&self.subtract(v, w)?))
    }

    pub fn distance<T: Float>(&self, v: &Vector<T>, w: &Vector<T>) -> Result<T, LinalgError> {
        Ok(magnitude(&self.subtract(v, w)?))
    }
}

use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;
use std::slice::Iter;

use num_traits::{Float, Num, Zero};

use crate::error::LinalgError;
use crate::ops::VectorOps;

/// Fixed-length sequence of numbers. Operations never mutate a `Vector`;
/// they return a new one.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector<T> {
    data: Vec<T>,
}

impl<T> Vector<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Vector<T>
where
    T: Clone + Zero,
{
    pub fn zeros(len: usize) -> Self {
        Vector::from_vec(vec![T::zero(); len])
    }
}

impl<T: Float> Vector<T> {
    /// True when both vectors have the same length and every pair of
    /// elements differs by at most `tol`.
    pub fn approx_eq(&self, other: &Vector<T>, tol: T) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| (*a - *b).abs() <= tol)
    }
}

impl<T> From<Vec<T>> for Vector<T> {
    fn from(value: Vec<T>) -> Self {
        Vector::from_vec(value)
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<T> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

/// Sum of pairwise products over the common prefix of `lhs` and `rhs`.
pub(crate) fn dot_slices<T: Num + Copy>(lhs: &[T], rhs: &[T]) -> T {
    lhs.iter()
        .zip(rhs.iter())
        .fold(T::zero(), |acc, (a, b)| acc + *a * *b)
}

/// Element-wise `v + w`.
///
/// Fails with [`LinalgError::LengthMismatch`] when the lengths differ; use
/// [`VectorOps`] with [`crate::config::LengthPolicy::Truncate`] to pair only
/// the overlapping prefix instead.
pub fn vector_add<T: Num + Copy>(v: &Vector<T>, w: &Vector<T>) -> Result<Vector<T>, LinalgError> {
    VectorOps::default().add(v, w)
}

/// Element-wise `v - w`.
pub fn vector_subtract<T: Num + Copy>(
    v: &Vector<T>,
    w: &Vector<T>,
) -> Result<Vector<T>, LinalgError> {
    VectorOps::default().subtract(v, w)
}

/// Element-wise sum of all `vectors`, folded left to right.
///
/// There is no identity vector to start from, so an empty slice is an
/// [`LinalgError::EmptyInput`] error.
pub fn vector_sum<T: Num + Copy>(vectors: &[Vector<T>]) -> Result<Vector<T>, LinalgError> {
    VectorOps::default().sum(vectors)
}

/// `c * v`, element by element.
pub fn scalar_multiply<T: Num + Copy>(c: T, v: &Vector<T>) -> Vector<T> {
    v.iter().map(|&vi| c * vi).collect()
}

/// Vector whose i-th element is the mean of the i-th elements of `vectors`.
pub fn vector_mean<T: Float>(vectors: &[Vector<T>]) -> Result<Vector<T>, LinalgError> {
    VectorOps::default().mean(vectors)
}

/// `v1 * w1 + ... + vn * wn`
pub fn dot<T: Num + Copy>(v: &Vector<T>, w: &Vector<T>) -> Result<T, LinalgError> {
    VectorOps::default().dot(v, w)
}

/// `v1 * v1 + ... + vn * vn`
pub fn sum_of_squares<T: Num + Copy>(v: &Vector<T>) -> T {
    dot_slices(v.as_slice(), v.as_slice())
}

/// Euclidean norm. Zero for an empty vector.
pub fn magnitude<T: Float>(v: &Vector<T>) -> T {
    sum_of_squares(v).sqrt()
}

/// `(v1 - w1) ** 2 + ... + (vn - wn) ** 2`
pub fn squared_distance<T: Num + Copy>(v: &Vector<T>, w: &Vector<T>) -> Result<T, LinalgError> {
    VectorOps::default().squared_distance(v, w)
}

/// Euclidean distance between `v` and `w`.
pub fn distance<T: Float>(v: &Vector<T>, w: &Vector<T>) -> Result<T, LinalgError> {
    VectorOps::default().distance(v, w)
}

use std::fmt;
use std::ops::Index;

use num_traits::{One, Zero};

use crate::error::{Axis, LinalgError};
use crate::math::vector::Vector;

/// Row-major matrix. Every row has `ncols` elements; a matrix with no rows
/// always reports zero columns.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T> Matrix<T> {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<T>) -> Result<Self, LinalgError> {
        let (rows, cols) = shape;
        if rows.checked_mul(cols).map_or(true, |n| n != data.len()) {
            log::debug!(
                "buffer of length {} does not fit shape ({}, {})",
                data.len(),
                rows,
                cols
            );
            return Err(LinalgError::ShapeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        let cols = if rows == 0 { 0 } else { cols };
        Ok(Self { data, rows, cols })
    }

    /// Build a matrix from nested rows. All rows must match the first row's
    /// length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, LinalgError> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(nrows.checked_mul(ncols).unwrap_or(0));
        for (idx, row) in rows.into_iter().enumerate() {
            if row.len() != ncols {
                log::debug!("row {} has {} columns, expected {}", idx, row.len(), ncols);
                return Err(LinalgError::RaggedRows {
                    row: idx,
                    expected: ncols,
                    found: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(Self {
            data,
            rows: nrows,
            cols: ncols,
        })
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

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Borrow row `row`. Panics if `row >= nrows()`; see [`Matrix::row`] for
    /// the checked version.
    pub fn row_slice(&self, row: usize) -> &[T] {
        assert!(row < self.rows, "row index out of bounds");
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| self.row_slice(r))
    }

    pub fn row(&self, i: usize) -> Result<Vector<T>, LinalgError>
    where
        T: Clone,
    {
        if i >= self.rows {
            log::debug!("row {} requested from matrix with {} rows", i, self.rows);
            return Err(LinalgError::IndexOutOfRange {
                axis: Axis::Row,
                index: i,
                len: self.rows,
            });
        }
        Ok(Vector::from_vec(self.row_slice(i).to_vec()))
    }

    /// Column `j` as a new vector. A matrix without rows has an empty
    /// column at every index.
    pub fn column(&self, j: usize) -> Result<Vector<T>, LinalgError>
    where
        T: Clone,
    {
        if self.rows > 0 && j >= self.cols {
            log::debug!(
                "column {} requested from matrix with {} columns",
                j,
                self.cols
            );
            return Err(LinalgError::IndexOutOfRange {
                axis: Axis::Column,
                index: j,
                len: self.cols,
            });
        }
        Ok(self.rows().map(|row| row[j].clone()).collect())
    }

    pub fn to_rows(&self) -> Vec<Vector<T>>
    where
        T: Clone,
    {
        self.rows().map(|row| Vector::from_vec(row.to_vec())).collect()
    }

    pub fn mapv<U, F>(&self, mut f: F) -> Matrix<U>
    where
        F: FnMut(&T) -> U,
    {
        Matrix {
            data: self.data.iter().map(|v| f(v)).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }
}

impl<T> Matrix<T>
where
    T: Zero + One,
{
    pub fn identity(n: usize) -> Self {
        make_matrix(n, n, is_diagonal)
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, Self::Error> {
        Matrix::from_rows(rows)
    }
}

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(index.1 < self.cols, "column index out of bounds");
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (r, row) in self.rows().enumerate() {
            write!(f, "[")?;
            for (c, value) in row.iter().enumerate() {
                write!(f, "{}", value)?;
                if c + 1 != row.len() {
                    write!(f, ", ")?;
                }
            }
            write!(f, "]")?;
            if r + 1 != self.rows {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}

/// `(num_rows, num_cols)`; `(0, 0)` for a matrix without rows.
pub fn shape<T>(a: &Matrix<T>) -> (usize, usize) {
    a.shape()
}

pub fn get_row<T: Clone>(a: &Matrix<T>, i: usize) -> Result<Vector<T>, LinalgError> {
    a.row(i)
}

pub fn get_col<T: Clone>(a: &Matrix<T>, j: usize) -> Result<Vector<T>, LinalgError> {
    a.column(j)
}

/// Returns a `num_rows x num_cols` matrix whose `(i, j)`th entry is
/// `entry_fn(i, j)`. Entries are generated once each, in row-major order.
pub fn make_matrix<T, F>(num_rows: usize, num_cols: usize, mut entry_fn: F) -> Matrix<T>
where
    F: FnMut(usize, usize) -> T,
{
    log::trace!("generating {}x{} matrix", num_rows, num_cols);
    let mut data = Vec::with_capacity(num_rows.checked_mul(num_cols).unwrap_or(0));
    for i in 0..num_rows {
        for j in 0..num_cols {
            data.push(entry_fn(i, j));
        }
    }
    Matrix {
        data,
        rows: num_rows,
        cols: if num_rows == 0 { 0 } else { num_cols },
    }
}

/// 1's on the diagonal, 0's everywhere else.
pub fn is_diagonal<T: Zero + One>(i: usize, j: usize) -> T {
    if i == j {
        T::one()
    } else {
        T::zero()
    }
}

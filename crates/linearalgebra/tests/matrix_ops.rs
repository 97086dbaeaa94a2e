//! Integration tests for matrix construction and accessors.

use anyhow::Result;

use linearalgebra::math::matrix::{get_col, get_row, is_diagonal, make_matrix, shape, Matrix};
use linearalgebra::{Axis, LinalgError};

// ---------------------------------------------------------------------------
// Shape
// ---------------------------------------------------------------------------

#[test]
fn shape_of_empty_matrix() -> Result<()> {
    let empty = Matrix::<f64>::from_rows(vec![])?;
    assert_eq!(shape(&empty), (0, 0));
    assert!(empty.is_empty());
    Ok(())
}

#[test]
fn shape_of_two_by_three() -> Result<()> {
    let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]])?;
    assert_eq!(shape(&a), (2, 3));
    assert_eq!(a.nrows(), 2);
    assert_eq!(a.ncols(), 3);
    Ok(())
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn from_rows_rejects_ragged_input() {
    let result = Matrix::from_rows(vec![vec![1, 2], vec![3], vec![4, 5]]);
    assert_eq!(
        result,
        Err(LinalgError::RaggedRows {
            row: 1,
            expected: 2,
            found: 1
        })
    );
}

#[test]
fn from_shape_vec_checks_buffer_length() {
    let result = Matrix::<f32>::from_shape_vec((2, 3), vec![1.0, 2.0, 3.0]);
    assert_eq!(
        result,
        Err(LinalgError::ShapeMismatch {
            rows: 2,
            cols: 3,
            len: 3
        })
    );
}

#[test]
fn from_shape_vec_rejects_overflowing_shape() {
    let result = Matrix::<f64>::from_shape_vec((usize::MAX, 2), vec![]);
    assert_eq!(
        result,
        Err(LinalgError::ShapeMismatch {
            rows: usize::MAX,
            cols: 2,
            len: 0
        })
    );
}

#[test]
fn from_shape_vec_and_from_rows_agree() -> Result<()> {
    let flat = Matrix::from_shape_vec((2, 2), vec![1, 2, 3, 4])?;
    let nested: Matrix<i32> = vec![vec![1, 2], vec![3, 4]].try_into()?;
    assert_eq!(flat, nested);
    assert_eq!(flat[(1, 0)], 3);
    Ok(())
}

#[test]
fn make_matrix_identity_pattern() {
    let m: Matrix<i32> = make_matrix(3, 3, is_diagonal);
    assert_eq!(m.to_vec(), vec![1, 0, 0, 0, 1, 0, 0, 0, 1]);
    assert_eq!(m, Matrix::identity(3));
    assert_eq!(m.to_string(), "[[1, 0, 0], [0, 1, 0], [0, 0, 1]]");
}

#[test]
fn make_matrix_from_index_sum() {
    let m = make_matrix(2, 3, |i, j| i + j);
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.row_slice(0), &[0, 1, 2]);
    assert_eq!(m.row_slice(1), &[1, 2, 3]);
}

#[test]
fn make_matrix_visits_entries_in_row_major_order() {
    let mut visited = Vec::new();
    let _ = make_matrix(2, 2, |i, j| {
        visited.push((i, j));
        0.0
    });
    assert_eq!(visited, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn make_matrix_with_zero_dimensions() {
    let no_rows = make_matrix(0, 5, |_, _| 1.0);
    assert_eq!(no_rows.shape(), (0, 0));

    let no_cols = make_matrix(3, 0, |_, _| 1.0);
    assert_eq!(no_cols.shape(), (3, 0));
    assert!(no_cols.to_rows().iter().all(|r| r.is_empty()));
}

#[test]
fn is_diagonal_values() {
    assert_eq!(is_diagonal::<i32>(2, 2), 1);
    assert_eq!(is_diagonal::<i32>(2, 3), 0);
    assert_eq!(is_diagonal::<f64>(0, 0), 1.0);
}

// ---------------------------------------------------------------------------
// Row and column access
// ---------------------------------------------------------------------------

#[test]
fn get_row_returns_row() -> Result<()> {
    let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
    assert_eq!(get_row(&a, 1)?.to_vec(), vec![3, 4]);
    Ok(())
}

#[test]
fn get_row_out_of_range() -> Result<()> {
    let a = Matrix::from_rows(vec![vec![1, 2]])?;
    assert_eq!(
        get_row(&a, 5),
        Err(LinalgError::IndexOutOfRange {
            axis: Axis::Row,
            index: 5,
            len: 1
        })
    );
    Ok(())
}

#[test]
fn get_col_returns_column() -> Result<()> {
    let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]])?;
    assert_eq!(get_col(&a, 0)?.to_vec(), vec![1, 3, 5]);
    assert_eq!(get_col(&a, 1)?.to_vec(), vec![2, 4, 6]);
    Ok(())
}

#[test]
fn get_col_out_of_range() -> Result<()> {
    let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]])?;
    let err = get_col(&a, 2).unwrap_err();
    assert_eq!(
        err,
        LinalgError::IndexOutOfRange {
            axis: Axis::Column,
            index: 2,
            len: 2
        }
    );
    assert_eq!(err.to_string(), "column index 2 out of range for 2 columns");
    Ok(())
}

#[test]
fn get_col_of_empty_matrix_is_empty() -> Result<()> {
    let empty = Matrix::<f64>::from_rows(vec![])?;
    assert!(get_col(&empty, 3)?.is_empty());
    Ok(())
}

#[test]
fn accessors_return_independent_copies() -> Result<()> {
    let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]])?;
    let rows = a.to_rows();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].to_vec(), vec![3.0, 4.0]);
    assert_eq!(a.mapv(|x| x * 10.0).row_slice(0), &[10.0, 20.0]);
    assert_eq!(a.row_slice(0), &[1.0, 2.0]);
    Ok(())
}

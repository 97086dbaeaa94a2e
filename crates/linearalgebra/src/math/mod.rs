//! Vector and matrix containers with the operations defined over them.
//!
//! `Vector` is a 1D sequence of numbers and `Matrix` a row-major 2D grid.
//! Both are plain owned buffers; every operation allocates its result and
//! leaves its inputs untouched.
pub mod matrix;
pub mod vector;

pub use matrix::{get_col, get_row, is_diagonal, make_matrix, shape, Matrix};
pub use vector::{
    distance, dot, magnitude, scalar_multiply, squared_distance, sum_of_squares, vector_add,
    vector_mean, vector_subtract, vector_sum, Vector,
};

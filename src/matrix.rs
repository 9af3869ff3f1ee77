//! A dense matrix of exact rationals, stored row-major.
//!
//! Construction by `(rows, cols)`, an identity constructor, a row
//! accessor/setter, row swap, a row-range sub-matrix, and row/column counts.
//! A lattice basis is a list of row vectors, so the matrix is organised
//! row-first throughout, with `Rational` coefficients in every entry.

use crate::vector::Vector;
use rug::Rational;
use std::{
    fmt,
    ops::{Index, IndexMut},
};

#[derive(Clone)]
pub struct Matrix {
    rows: Vec<Vector>,
    dimensions: (usize, usize),
}

impl Matrix {
    /// An all-zero `num_rows` x `num_cols` matrix.
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Self {
            rows: vec![Vector::zero(num_cols); num_rows],
            dimensions: (num_rows, num_cols),
        }
    }

    /// The `n` x `n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self {
            rows: (0..n).map(|i| Vector::basis_vector(n, i)).collect(),
            dimensions: (n, n),
        }
    }

    /// Build a matrix from explicit row data.
    pub fn from_rows(rows: Vec<Vec<Rational>>) -> Self {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, |r| r.len());
        Self {
            rows: rows.into_iter().map(Vector::from_vec).collect(),
            dimensions: (num_rows, num_cols),
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.dimensions
    }

    pub fn num_rows(&self) -> usize {
        self.dimensions.0
    }

    pub fn num_cols(&self) -> usize {
        self.dimensions.1
    }

    pub fn row(&self, i: usize) -> &Vector {
        &self.rows[i]
    }

    pub fn row_mut(&mut self, i: usize) -> &mut Vector {
        &mut self.rows[i]
    }

    pub fn set_row(&mut self, i: usize, row: Vector) {
        self.rows[i] = row;
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
    }

    /// The sub-matrix spanning rows `[start, end)`, all columns.
    pub fn submatrix_rows(&self, start: usize, end: usize) -> Self {
        let cols = self.num_cols();
        Self {
            rows: self.rows[start..end].to_vec(),
            dimensions: (end - start, cols),
        }
    }

    /// The square sub-matrix spanning rows and columns `[start, end)`.
    pub fn submatrix(&self, start: usize, end: usize) -> Self {
        let rows = self.rows[start..end]
            .iter()
            .map(|row| {
                Vector::from_vec((start..end).map(|j| row.get(j).clone()).collect())
            })
            .collect();
        Self {
            rows,
            dimensions: (end - start, end - start),
        }
    }
}

impl Index<usize> for Matrix {
    type Output = Vector;

    fn index(&self, index: usize) -> &Vector {
        &self.rows[index]
    }
}

impl IndexMut<usize> for Matrix {
    fn index_mut(&mut self, index: usize) -> &mut Vector {
        &mut self.rows[index]
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{:?}", self.rows)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn identity_is_diagonal() {
        let id = Matrix::identity(3);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1 } else { 0 };
                assert_eq!(*id.row(i).get(j), Rational::from(expected));
            }
        }
    }

    #[test]
    fn swap_rows_exchanges_content() {
        let mut m = Matrix::from_rows(vec![
            vec![Rational::from(1), Rational::from(2)],
            vec![Rational::from(3), Rational::from(4)],
        ]);
        m.swap_rows(0, 1);
        assert_eq!(*m.row(0).get(0), Rational::from(3));
        assert_eq!(*m.row(1).get(0), Rational::from(1));
    }

    #[test]
    fn submatrix_rows_drops_prefix() {
        let m = Matrix::from_rows(vec![
            vec![Rational::from(0), Rational::from(0)],
            vec![Rational::from(1), Rational::from(2)],
        ]);
        let sub = m.submatrix_rows(1, 2);
        assert_eq!(sub.num_rows(), 1);
        assert_eq!(*sub.row(0).get(1), Rational::from(2));
    }
}

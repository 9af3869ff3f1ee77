//! Incremental Gram–Schmidt orthogonalisation.
//!
//! Maintains `Bᴳˢ`, `μ`, and the squared norms `S`, extending them one row at
//! a time as the LLL kernel sweeps forward. All arithmetic is exact; nothing
//! here ever rounds.

use crate::matrix::Matrix;
use rug::Rational;

pub(crate) struct GramSchmidt {
    pub(crate) basis: Matrix,
    pub(crate) coefficients: Matrix,
    pub(crate) sizes: Vec<Rational>,
    /// Highest row index already orthogonalised.
    pub(crate) kmax: usize,
}

impl GramSchmidt {
    pub(crate) fn new(b: &Matrix) -> Self {
        let n = b.num_rows();
        let m = b.num_cols();

        let mut basis = Matrix::new(n, m);
        basis.set_row(0, b.row(0).clone());

        let mut sizes = vec![Rational::from(0); n];
        sizes[0] = b.row(0).norm_squared();

        Self {
            basis,
            coefficients: Matrix::new(n, n),
            sizes,
            kmax: 0,
        }
    }

    /// Extend the orthogonalisation to include row `k`, assuming rows
    /// `0..k` are already orthogonalised.
    pub(crate) fn extend(&mut self, b: &Matrix, k: usize) {
        for j in 0..k {
            let mu_kj = if self.sizes[j] != 0 {
                b.row(k).dot(self.basis.row(j)) / &self.sizes[j]
            } else {
                Rational::from(0)
            };
            self.coefficients.row_mut(k).set(j, mu_kj);
        }

        let mut bgs_k = b.row(k).clone();
        for j in 0..k {
            let mu_kj = self.coefficients.row(k).get(j).clone();
            bgs_k.sub_assign(&self.basis.row(j).mulf(&mu_kj));
        }

        self.sizes[k] = bgs_k.norm_squared();
        self.basis.set_row(k, bgs_k);
    }
}

//! The Lenstra–Lenstra–Lovász lattice basis reduction kernel.
//!
//! An incrementally maintained Gram–Schmidt state, a `red`/`swapg` pair
//! that drives size-reduction and swaps, and a transformation matrix `H`
//! tracked alongside the basis so the caller gets back the exact
//! unimodular map that produced the reduced basis.

use crate::gram_schmidt::GramSchmidt;
use crate::matrix::Matrix;
use crate::params::{eta, Params};
use crate::result::ReductionResult;
use crate::util::round_nearest;
use rug::Rational;

struct LllState {
    n: usize,
    k: usize,
    kmax: usize,
    should_update_gs: bool,
    b: Matrix,
    h: Matrix,
    gs: GramSchmidt,
    delta: Rational,
    eta: Rational,
    debug: bool,
}

impl LllState {
    fn new(basis: &Matrix, params: &Params) -> Self {
        let n = basis.num_rows();
        let b = basis.clone();
        let gs = GramSchmidt::new(&b);

        Self {
            n,
            k: 1,
            kmax: 0,
            should_update_gs: true,
            b,
            h: Matrix::identity(n),
            gs,
            delta: params.delta().clone(),
            eta: eta(),
            debug: params.debug(),
        }
    }

    fn mu(&self, i: usize, j: usize) -> Rational {
        self.gs.coefficients.row(i).get(j).clone()
    }

    fn set_mu(&mut self, i: usize, j: usize, value: Rational) {
        self.gs.coefficients.row_mut(i).set(j, value);
    }

    fn run(&mut self) {
        while self.k < self.n {
            if self.debug {
                println!("k = {}, basis = {:?}", self.k, self.b);
            }

            if self.k > self.kmax && self.should_update_gs {
                self.kmax = self.k;
                self.gs.extend(&self.b, self.k);
            }

            self.test_condition(self.k);
        }
    }

    /// Size-reduce row `k` against row `l`: `Bₖ ← Bₖ − q·Bₗ` for the nearest
    /// integer `q` to `μₖ,ₗ`, unless `|μₖ,ₗ| ≤ η` already.
    fn red(&mut self, k: usize, l: usize) {
        let mu_kl = self.mu(k, l);
        if mu_kl.clone().abs() <= self.eta {
            return;
        }

        let q = round_nearest(&mu_kl);
        let q_rat = Rational::from(&q);

        let b_l = self.b.row(l).clone();
        self.b.row_mut(k).sub_assign(&b_l.mulf(&q_rat));

        let h_l = self.h.row(l).clone();
        self.h.row_mut(k).sub_assign(&h_l.mulf(&q_rat));

        self.set_mu(k, l, mu_kl - &q_rat);

        for i in 0..l {
            let mu_ki = self.mu(k, i);
            let mu_li = self.mu(l, i);
            self.set_mu(k, i, mu_ki - &q_rat * &mu_li);
        }
    }

    fn test_condition(&mut self, k: usize) {
        self.red(k, k - 1);

        let mu_k_km1 = self.mu(k, k - 1);
        let lovasz_rhs =
            (&self.delta - &mu_k_km1 * &mu_k_km1) * &self.gs.sizes[k - 1];

        if self.gs.sizes[k] < lovasz_rhs {
            self.swapg(k);
            self.k = if k > 1 { k - 1 } else { 1 };
            self.should_update_gs = false;
        } else {
            if k >= 2 {
                for l in (0..=k - 2).rev() {
                    self.red(k, l);
                }
            }
            self.k = k + 1;
            self.should_update_gs = true;
        }
    }

    /// Swap rows `idx` and `idx - 1`, repairing `B`, `H`, `Bᴳˢ`, `μ`, and `S`
    /// in place rather than recomputing them from scratch.
    fn swapg(&mut self, idx: usize) {
        self.b.swap_rows(idx, idx - 1);
        self.h.swap_rows(idx, idx - 1);

        if idx >= 2 {
            for j in 0..idx - 1 {
                let tmp = self.mu(idx, j);
                self.set_mu(idx, j, self.mu(idx - 1, j));
                self.set_mu(idx - 1, j, tmp);
            }
        }

        let nu = self.mu(idx, idx - 1);
        let b_prime = &self.gs.sizes[idx] + &nu * &nu * &self.gs.sizes[idx - 1];

        if self.gs.sizes[idx] == 0 && nu == 0 {
            self.gs.sizes.swap(idx, idx - 1);
            self.gs.basis.swap_rows(idx, idx - 1);
            for i in (idx + 1)..=self.kmax {
                let tmp = self.mu(i, idx);
                self.set_mu(i, idx, self.mu(i, idx - 1));
                self.set_mu(i, idx - 1, tmp);
            }
        } else if self.gs.sizes[idx] == 0 {
            self.gs.sizes[idx - 1] = b_prime.clone();
            let scaled = self.gs.basis.row(idx - 1).mulf(&nu);
            self.gs.basis.set_row(idx - 1, scaled);
            self.set_mu(idx, idx - 1, Rational::from(1) / &nu);
            for i in (idx + 1)..=self.kmax {
                let v = self.mu(i, idx - 1) / &nu;
                self.set_mu(i, idx - 1, v);
            }
        } else {
            let t = &self.gs.sizes[idx - 1] / &b_prime;
            let new_mu = &nu * &t;
            self.set_mu(idx, idx - 1, new_mu.clone());

            let saved = self.gs.basis.row(idx - 1).clone();
            let new_bgs_im1 = self.gs.basis.row(idx).add(&saved.mulf(&nu));
            let coeff = &self.gs.sizes[idx] / &b_prime;
            let new_bgs_i = saved.mulf(&coeff).sub(&new_bgs_im1.mulf(&new_mu));

            self.gs.basis.set_row(idx - 1, new_bgs_im1);
            self.gs.basis.set_row(idx, new_bgs_i);

            self.gs.sizes[idx] = &self.gs.sizes[idx] * &t;
            self.gs.sizes[idx - 1] = b_prime;

            for i in (idx + 1)..=self.kmax {
                let t_prime = self.mu(i, idx);
                let new_mu_i_idx = self.mu(i, idx - 1) - &nu * &t_prime;
                let new_mu_i_idx1 = &t_prime + &new_mu * &new_mu_i_idx;
                self.set_mu(i, idx, new_mu_i_idx);
                self.set_mu(i, idx - 1, new_mu_i_idx1);
            }
        }
    }

    fn into_result(self) -> ReductionResult {
        let mut p = 0;
        while p < self.n && self.b.row(p).is_zero() {
            p += 1;
        }

        let reduced_basis = self.b.submatrix_rows(p, self.n);
        let gram_schmidt_basis = self.gs.basis.submatrix_rows(p, self.n);
        let gram_schmidt_coefficients = self.gs.coefficients.submatrix(p, self.n);
        let gram_schmidt_sizes = self.gs.sizes[p..self.n].to_vec();

        ReductionResult {
            dependent_vectors: p,
            reduced_basis,
            transformation: self.h,
            gram_schmidt_basis,
            gram_schmidt_coefficients,
            gram_schmidt_sizes,
        }
    }
}

/// Reduce `basis` under the given [`Params`], returning the reduced basis,
/// the transformation `H`, and the backing Gram–Schmidt data.
///
/// `basis` must have at least one row and one column. Panics if
/// `params.delta()` is outside `(1/4, 1]`.
pub fn reduce(basis: &Matrix, params: &Params) -> ReductionResult {
    params.validate();
    assert!(basis.num_rows() >= 1 && basis.num_cols() >= 1);

    let mut state = LllState::new(basis, params);
    state.run();
    state.into_result()
}

#[cfg(test)]
mod test {
    use super::*;
    use rug::Rational;

    fn r(n: i64) -> Rational {
        Rational::from(n)
    }

    #[test]
    fn identity_is_already_reduced() {
        let basis = Matrix::identity(3);
        let result = reduce(&basis, &Params::default());

        assert_eq!(result.num_dependent_vectors(), 0);
        for i in 0..3 {
            assert_eq!(*result.gram_schmidt_sizes().get(i).unwrap(), r(1));
            for j in 0..3 {
                let expected = if i == j { 1 } else { 0 };
                assert_eq!(*result.reduced_basis().row(i).get(j), r(expected));
            }
        }
    }

    #[test]
    fn swap_pair_shortens_basis() {
        let basis = Matrix::from_rows(vec![vec![r(1), r(2)], vec![r(1), r(0)]]);
        let result = reduce(&basis, &Params::default());

        assert_eq!(result.num_dependent_vectors(), 0);
        // H must reproduce the reduced basis from the original one.
        let h = result.transformations();
        for i in 0..2 {
            let mut row = crate::vector::Vector::zero(basis.num_cols());
            for j in 0..2 {
                row = row.add(&basis.row(j).mulf(h.row(i).get(j)));
            }
            assert_eq!(row, *result.reduced_basis().row(i));
        }
    }

    #[test]
    fn linear_dependence_is_reported() {
        let basis = Matrix::from_rows(vec![
            vec![r(2), r(4)],
            vec![r(1), r(2)],
            vec![r(3), r(6)],
        ]);
        let result = reduce(&basis, &Params::default());

        assert_eq!(result.num_dependent_vectors(), 2);
        assert_eq!(result.reduced_basis().num_rows(), 1);
    }

    #[test]
    fn size_reduction_invariant_holds() {
        let basis = Matrix::from_rows(vec![
            vec![r(1), r(1), r(1)],
            vec![r(-1), r(0), r(2)],
            vec![r(3), r(5), r(6)],
        ]);
        let result = reduce(&basis, &Params::default());

        let n = result.reduced_basis().num_rows();
        let mu = result.gram_schmidt_coefficients();
        let half = Rational::from((1, 2));
        for i in 0..n {
            for j in 0..i {
                assert!(mu.row(i).get(j).clone().abs() <= half);
            }
        }
    }

    #[test]
    fn idempotent_on_already_reduced_basis() {
        let basis = Matrix::from_rows(vec![
            vec![r(1), r(1), r(1)],
            vec![r(-1), r(0), r(2)],
            vec![r(3), r(5), r(6)],
        ]);
        let once = reduce(&basis, &Params::default());
        let twice = reduce(once.reduced_basis(), &Params::default());

        assert_eq!(twice.num_dependent_vectors(), 0);
        let h = twice.transformations();
        for i in 0..h.num_rows() {
            for j in 0..h.num_cols() {
                let expected = if i == j { 1 } else { 0 };
                assert_eq!(*h.row(i).get(j), r(expected));
            }
        }
    }
}

//! Block Korkine–Zolotarev reduction: the LLL kernel driven over sliding
//! windows, with a Schnorr–Euchner enumerator searching each window for a
//! shorter lattice vector.
//!
//! The driver repeatedly re-invokes LLL on the current basis and, for each
//! window, either confirms the block is already reduced or splices the
//! enumerator's replacement vector into the basis and re-reduces.

use crate::lll;
use crate::matrix::Matrix;
use crate::params::Params;
use crate::result::ReductionResult;
use crate::util::round_nearest;
use crate::vector::Vector;
use rug::{Integer, Rational};
use std::cmp::min;

/// Reduce `basis` with BKZ at block size `block_size` (`β ≥ 2`).
///
/// Internally repeatedly calls [`lll::reduce`] on the current basis and,
/// for each sliding window, searches it with [`enumerate`] for a shorter
/// vector; when one is found it is spliced into the basis and re-reduced.
pub fn reduce_bkz(basis: &Matrix, block_size: usize, params: &Params) -> ReductionResult {
    assert!(block_size >= 2);
    params.validate();

    let mut result = lll::reduce(basis, params);
    let mut n = result.reduced_basis().num_rows();

    if n < 2 {
        return result;
    }

    let mut b = result.reduced_basis().clone();
    let mut sizes = result.gram_schmidt_sizes().to_vec();
    let mut mu = result.gram_schmidt_coefficients().clone();

    let mut z = 0usize;
    let mut j = 0usize;

    while z < n - 1 {
        j = (j % (n - 1)) + 1;
        let k = min(j + block_size - 1, n);
        let h = min(k + 1, n);

        let v = enumerate(j - 1, k - 1, n, &sizes, &mu);

        if passvec(&v, j - 1, n) {
            z += 1;
            result = lll::reduce(&b, params);
        } else {
            z = 0;

            let m = b.num_cols();
            let mut w = Vector::zero(m);
            for t in (j - 1)..=(k - 1) {
                w = w.add(&b.row(t).mulf(&v[t]));
            }

            let mut augmented = Matrix::new(h + 1, m);
            if j >= 2 {
                for i in 0..=(j - 2) {
                    augmented.set_row(i, b.row(i).clone());
                }
            }
            augmented.set_row(j - 1, w);
            for idx in (j - 1)..=(h - 1) {
                augmented.set_row(idx + 1, b.row(idx).clone());
            }

            result = lll::reduce(&augmented, params);
        }

        n = result.reduced_basis().num_rows();
        b = result.reduced_basis().clone();
        sizes = result.gram_schmidt_sizes().to_vec();
        mu = result.gram_schmidt_coefficients().clone();

        if n < 2 {
            break;
        }
    }

    result
}

/// `true` iff `v` is the `idx`-th standard basis vector of length `n`.
fn passvec(v: &[Rational], idx: usize, n: usize) -> bool {
    if v.len() != n {
        return false;
    }
    v.iter()
        .enumerate()
        .all(|(i, value)| if i == idx { *value == 1 } else { *value == 0 })
}

/// Schnorr–Euchner deep-insertion enumeration over block `[ini, fim]`:
/// finds the integer coefficient vector `u` (zero outside `[ini, fim]`)
/// minimising `‖Σ uᵢ·Bᴳˢᵢ‖²`, starting from the running bound `S[ini]`.
fn enumerate(ini: usize, fim: usize, n: usize, sizes: &[Rational], mu: &Matrix) -> Vec<Rational> {
    let len = fim + 2;

    let mut u_t = vec![Integer::from(0); len];
    let mut y = vec![Rational::from(0); len];
    let mut c_t = vec![Rational::from(0); len + 1];
    let mut center = vec![Integer::from(0); len];
    let mut delta = vec![Integer::from(0); len];
    let mut direction = vec![1i32; len];

    let mut best = vec![Integer::from(0); n];
    best[ini] = Integer::from(1);

    let mut c_l = sizes[ini].clone();
    u_t[ini] = Integer::from(1);
    y[ini] = Rational::from(0);
    delta[ini] = Integer::from(0);
    direction[ini] = 1;
    let mut s_level = ini;
    let mut t = ini;
    c_t[fim + 1] = Rational::from(0);

    while t <= fim {
        let term = &y[t] + Rational::from(u_t[t].clone());
        c_t[t] = &c_t[t + 1] + &term * &term * &sizes[t];

        if c_t[t] < c_l {
            if t > ini {
                t -= 1;
                let mut y_val = Rational::from(0);
                for i in (t + 1)..=s_level {
                    let mu_it = mu.row(i).get(t).clone();
                    let u_i = Rational::from(u_t[i].clone());
                    y_val += mu_it * u_i;
                }
                y[t] = y_val;

                let neg_y = -y[t].clone();
                let rounded = round_nearest(&neg_y);
                center[t] = rounded.clone();
                u_t[t] = rounded.clone();
                delta[t] = Integer::from(0);
                direction[t] = if neg_y < Rational::from(rounded) { -1 } else { 1 };
            } else {
                c_l = c_t[ini].clone();
                best[ini..=fim].clone_from_slice(&u_t[ini..=fim]);
            }
        } else {
            t += 1;
            if t > s_level {
                s_level = t;
            }
            if t < s_level {
                delta[t] = -delta[t].clone();
            }
            if (delta[t].clone() * direction[t]) >= 0 {
                delta[t] += direction[t];
            }
            u_t[t] = &center[t] + &delta[t];
        }
    }

    best.into_iter().map(Rational::from).collect()
}

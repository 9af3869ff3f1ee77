//! An implementation of lattice basis reduction over exact rational
//! arithmetic: the Lenstra–Lenstra–Lovász (LLL) algorithm and its Block
//! Korkine–Zolotarev (BKZ) generalisation.
//!
//! Given an integer lattice presented as a matrix of (possibly linearly
//! dependent) row vectors, [`lll::reduce`] produces an equivalent basis whose
//! vectors are short and nearly orthogonal, together with the unimodular
//! transformation that carries the input basis to the output basis and the
//! Gram–Schmidt data backing the reduction. [`bkz::reduce_bkz`] drives LLL
//! over sliding blocks and enumerates each block for a shorter vector,
//! typically finding a basis LLL alone would miss.
//!
//! Everything is computed over `rug::Rational`/`rug::Integer` — there is no
//! floating-point reduction path.
//!
//! # Examples
//!
//! ```rust
//! use lll_exact::{matrix::Matrix, params::Params, lll};
//! use rug::Rational;
//!
//! // Cohen's example basis (Algorithm 2.6.3 worked example).
//! let basis = Matrix::from_rows(vec![
//!     vec![Rational::from(1), Rational::from(1), Rational::from(1)],
//!     vec![Rational::from(-1), Rational::from(0), Rational::from(2)],
//!     vec![Rational::from(3), Rational::from(5), Rational::from(6)],
//! ]);
//!
//! let result = lll::reduce(&basis, &Params::default());
//! assert_eq!(result.num_dependent_vectors(), 0);
//! ```

pub mod bkz;
mod gram_schmidt;
pub mod lll;
pub mod matrix;
pub mod params;
pub mod result;
mod util;
pub mod vector;

//! Small helpers shared by the LLL kernel and the BKZ enumerator.

use rug::{Integer, Rational};

/// Round `q` to the nearest integer, ties away from zero.
///
/// `rug::Rational::round` already implements this convention (matching
/// GMP's `mpq` rounding), so this just gives the operation a clearer name.
pub(crate) fn round_nearest(q: &Rational) -> Integer {
    q.round_ref().into()
}

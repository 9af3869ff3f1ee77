//! Reduction parameters.
//!
//! A small mutable builder grouping the Lovász parameter `delta` and the
//! `debug` flag behind one type, so `reduce`/`reduce_bkz` take a single
//! configuration value instead of a growing argument list.

use rug::Rational;

/// The fixed Gram–Schmidt size-reduction bound `η = 1/2`.
pub(crate) fn eta() -> Rational {
    Rational::from((1, 2))
}

/// Configuration for a single reduction call.
#[derive(Clone, Debug)]
pub struct Params {
    delta: Rational,
    debug: bool,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            delta: Rational::from((3, 4)),
            debug: false,
        }
    }
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the Lovász parameter `delta`. Must lie in `(1/4, 1]`; checked
    /// lazily at `reduce`/`reduce_bkz` entry rather than here, since a
    /// `Params` can be built once and reused across several reductions.
    pub fn with_delta(mut self, delta: Rational) -> Self {
        self.delta = delta;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn delta(&self) -> &Rational {
        &self.delta
    }

    pub fn debug(&self) -> bool {
        self.debug
    }

    /// Panics if `delta` is outside `(1/4, 1]`; a bad delta is a programmer
    /// error, not a recoverable condition.
    pub(crate) fn validate(&self) {
        let quarter = Rational::from((1, 4));
        assert!(
            self.delta > quarter && self.delta <= Rational::from(1),
            "delta must lie in (1/4, 1], got {}",
            self.delta
        );
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_delta_is_three_quarters() {
        assert_eq!(*Params::default().delta(), Rational::from((3, 4)));
    }

    #[test]
    #[should_panic]
    fn validate_rejects_low_delta() {
        Params::new().with_delta(Rational::from((1, 4))).validate();
    }

    #[test]
    fn validate_accepts_delta_one() {
        Params::new().with_delta(Rational::from(1)).validate();
    }
}

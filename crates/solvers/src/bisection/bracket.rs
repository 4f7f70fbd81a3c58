use thiserror::Error;

/// Errors that can occur when validating a bisection bracket.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,

    /// The left endpoint is not strictly less than the right endpoint.
    #[error("left endpoint must be less than right endpoint")]
    NotIncreasing,
}

/// Current bracket bounds and the function value at the left bound.
///
/// Only the left value is tracked: each shrink compares the sign of the
/// midpoint value against the left endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    f_left: f64,
}

impl Bracket {
    /// Creates a bracket from ordered endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError::NotIncreasing` unless `left < right`.
    pub(super) fn new(left: f64, right: f64, f_left: f64) -> Result<Self, BracketError> {
        if left >= right {
            return Err(BracketError::NotIncreasing);
        }

        Ok(Self {
            left,
            right,
            f_left,
        })
    }

    /// Returns the bracket bounds as an array.
    pub(super) fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    pub(super) fn midpoint(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Returns half the bracket width.
    pub(super) fn half_width(&self) -> f64 {
        (self.right - self.left) / 2.0
    }

    /// Shrinks the bracket to the half that keeps the sign change.
    ///
    /// The test is the literal product `f_left * f_mid < 0`. Whenever the
    /// product is not negative (same sign, a zero factor, or an underflow to
    /// zero) the left bound moves.
    pub(super) fn shrink(&mut self, mid: f64, f_mid: f64) {
        if self.f_left * f_mid < 0.0 {
            self.right = mid;
        } else {
            self.left = mid;
            self.f_left = f_mid;
        }
    }
}

/// Checks that both endpoints are finite.
///
/// # Errors
///
/// Returns `BracketError::NonFinite` if either endpoint is `NaN` or infinite.
pub(super) fn check_finite(bracket: [f64; 2]) -> Result<(), BracketError> {
    if bracket.iter().all(|x| x.is_finite()) {
        Ok(())
    } else {
        Err(BracketError::NonFinite)
    }
}

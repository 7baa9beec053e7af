use fuzzbound_core::{constraint::ConstraintError, Membership};

use super::ParameterError;

/// A triangular fuzzy number with feet at `a` and `c` and peak at `b`.
///
/// The membership degree ramps linearly from 0 at `a` up to 1 at `b`, then
/// back down to 0 at `c`, and is 0 outside `[a, c]`. Either shoulder may be
/// degenerate (`a == b` or `b == c`); the peak still evaluates to 1.
///
/// # Examples
///
/// ```
/// use fuzzbound_core::Membership;
/// use fuzzbound_transform::Triangular;
///
/// let tri = Triangular::new(0.0, 1.0, 2.0).unwrap();
/// assert_eq!(tri.degree(1.0), 1.0);
/// assert_eq!(tri.degree(0.5), 0.5);
/// assert_eq!(tri.degree(3.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangular {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangular {
    /// Creates a triangular fuzzy number from its feet and peak.
    ///
    /// # Errors
    ///
    /// - [`ParameterError::Unordered`] unless `a <= b <= c`.
    /// - [`ParameterError::Constraint`] if any parameter is NaN.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self, ParameterError> {
        if a.is_nan() || b.is_nan() || c.is_nan() {
            return Err(ConstraintError::NotANumber.into());
        }
        if !(a <= b && b <= c) {
            return Err(ParameterError::Unordered { a, b, c });
        }
        Ok(Self { a, b, c })
    }

    /// The left foot, where the rising ramp starts.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// The peak, where the degree reaches 1.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// The right foot, where the falling ramp ends.
    #[must_use]
    pub fn c(&self) -> f64 {
        self.c
    }
}

impl Membership for Triangular {
    fn degree(&self, x: f64) -> f64 {
        if x < self.a || x > self.c {
            0.0
        } else if x < self.b {
            // x < b implies b > a, so the ramp slope is well defined.
            (x - self.a) / (self.b - self.a)
        } else if x > self.b {
            (self.c - x) / (self.c - self.b)
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use fuzzbound_core::constraint::UnitInterval;

    use super::*;

    #[test]
    fn ramps_linearly_between_feet_and_peak() {
        let tri = Triangular::new(0.0, 1.0, 3.0).unwrap();

        assert_relative_eq!(tri.degree(0.25), 0.25);
        assert_relative_eq!(tri.degree(1.0), 1.0);
        assert_relative_eq!(tri.degree(2.0), 0.5);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn zero_outside_support() {
        let tri = Triangular::new(-1.0, 0.0, 1.0).unwrap();

        assert_eq!(tri.degree(-1.5), 0.0);
        assert_eq!(tri.degree(1.5), 0.0);
        assert_eq!(tri.degree(-1.0), 0.0);
        assert_eq!(tri.degree(1.0), 0.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn degenerate_shoulders_still_peak_at_one() {
        let left = Triangular::new(1.0, 1.0, 2.0).unwrap();
        assert_eq!(left.degree(1.0), 1.0);
        assert_eq!(left.degree(1.5), 0.5);

        let right = Triangular::new(0.0, 1.0, 1.0).unwrap();
        assert_eq!(right.degree(1.0), 1.0);

        let singleton = Triangular::new(1.0, 1.0, 1.0).unwrap();
        assert_eq!(singleton.degree(1.0), 1.0);
        assert_eq!(singleton.degree(1.0 + f64::EPSILON), 0.0);
    }

    #[test]
    fn unordered_parameters_are_rejected() {
        assert!(matches!(
            Triangular::new(2.0, 1.0, 3.0),
            Err(ParameterError::Unordered { .. })
        ));
        assert!(matches!(
            Triangular::new(0.0, 2.0, 1.0),
            Err(ParameterError::Unordered { .. })
        ));
        assert!(matches!(
            Triangular::new(f64::NAN, 1.0, 2.0),
            Err(ParameterError::Constraint(ConstraintError::NotANumber))
        ));
    }

    #[test]
    fn degrees_stay_in_the_unit_interval() {
        let tri = Triangular::new(-2.0, 0.5, 4.0).unwrap();

        for i in -10..=10 {
            let x = f64::from(i) * 0.7;
            assert!(UnitInterval::new(tri.degree(x)).is_ok());
        }
    }
}

use fuzzbound_core::{
    constraint::{Constrained, ConstraintError, StrictlyPositive},
    Membership,
};

use super::ParameterError;

/// A Gaussian fuzzy set: `exp(-0.5 * ((x - center) / sigma)^2)`.
///
/// The degree peaks at 1 at `center` and decays smoothly on both sides; it is
/// strictly positive for every finite input, so Gaussian members never
/// trigger the zero-degree sentinel in ratio reductions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gaussian {
    center: f64,
    sigma: Constrained<f64, StrictlyPositive>,
}

impl Gaussian {
    /// Creates a Gaussian fuzzy set from its center and spread.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Constraint`] if `sigma` is not strictly
    /// positive or either parameter is NaN.
    pub fn new(center: f64, sigma: f64) -> Result<Self, ParameterError> {
        if center.is_nan() {
            return Err(ConstraintError::NotANumber.into());
        }
        Ok(Self {
            center,
            sigma: StrictlyPositive::new(sigma)?,
        })
    }

    /// The input at which the degree reaches 1.
    #[must_use]
    pub fn center(&self) -> f64 {
        self.center
    }

    /// The spread of the curve; always strictly positive.
    #[must_use]
    pub fn sigma(&self) -> f64 {
        *self.sigma.as_ref()
    }
}

impl Membership for Gaussian {
    fn degree(&self, x: f64) -> f64 {
        let z = (x - self.center) / self.sigma();
        (-0.5 * z * z).exp()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use fuzzbound_core::constraint::UnitInterval;

    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn peaks_at_one_at_the_center() {
        let g = Gaussian::new(2.0, 0.5).unwrap();
        assert_eq!(g.degree(2.0), 1.0);
    }

    #[test]
    fn one_sigma_away_matches_closed_form() {
        let g = Gaussian::new(0.0, 1.5).unwrap();
        assert_relative_eq!(g.degree(1.5), (-0.5_f64).exp());
        assert_relative_eq!(g.degree(-1.5), (-0.5_f64).exp());
    }

    #[test]
    fn symmetric_about_the_center() {
        let g = Gaussian::new(1.0, 2.0).unwrap();
        assert_relative_eq!(g.degree(1.0 + 0.7), g.degree(1.0 - 0.7));
    }

    #[test]
    fn non_positive_sigma_is_rejected() {
        assert!(matches!(
            Gaussian::new(0.0, 0.0),
            Err(ParameterError::Constraint(ConstraintError::Zero))
        ));
        assert!(matches!(
            Gaussian::new(0.0, -1.0),
            Err(ParameterError::Constraint(ConstraintError::Negative))
        ));
        assert!(matches!(
            Gaussian::new(f64::NAN, 1.0),
            Err(ParameterError::Constraint(ConstraintError::NotANumber))
        ));
    }

    #[test]
    fn degrees_stay_in_the_unit_interval() {
        let g = Gaussian::new(-1.0, 0.3).unwrap();

        for i in -10..=10 {
            let x = f64::from(i) * 0.9;
            assert!(UnitInterval::new(g.degree(x)).is_ok());
        }
    }
}

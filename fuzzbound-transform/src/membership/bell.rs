use fuzzbound_core::{
    constraint::{Constrained, ConstraintError, StrictlyPositive},
    Membership,
};

use super::ParameterError;

/// A generalized bell fuzzy set: `1 / (1 + |(x - center) / width|^(2 * shape))`.
///
/// `width` sets the half-width of the curve at degree 0.5, `shape` controls
/// how sharp the transition is, and `center` locates the peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bell {
    width: Constrained<f64, StrictlyPositive>,
    shape: f64,
    center: f64,
}

impl Bell {
    /// Creates a generalized bell fuzzy set.
    ///
    /// # Errors
    ///
    /// Returns [`ParameterError::Constraint`] if `width` is not strictly
    /// positive or any parameter is NaN.
    pub fn new(width: f64, shape: f64, center: f64) -> Result<Self, ParameterError> {
        if shape.is_nan() || center.is_nan() {
            return Err(ConstraintError::NotANumber.into());
        }
        Ok(Self {
            width: StrictlyPositive::new(width)?,
            shape,
            center,
        })
    }

    /// The half-width of the curve at degree 0.5; always strictly positive.
    #[must_use]
    pub fn width(&self) -> f64 {
        *self.width.as_ref()
    }

    /// The sharpness exponent.
    #[must_use]
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// The input at which the degree reaches 1.
    #[must_use]
    pub fn center(&self) -> f64 {
        self.center
    }
}

impl Membership for Bell {
    fn degree(&self, x: f64) -> f64 {
        let z = ((x - self.center) / self.width()).abs();
        1.0 / (1.0 + z.powf(2.0 * self.shape))
    }
}

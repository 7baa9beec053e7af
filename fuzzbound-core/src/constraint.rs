//! Construction-time numeric constraints for shape parameters.
//!
//! Membership families carry invariants like "sigma is strictly positive" or
//! "a degree lies in `[0, 1]`". This module expresses those invariants at the
//! type level: a [`Constrained<T, C>`] value can only be built through a check,
//! so evaluation code never has to re-validate.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: greater than zero (Gaussian `sigma`, bell `width`)
//! - [`UnitInterval`]: within `[0, 1]` (membership degrees)
//!
//! Custom invariants are added by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;
pub use unit_interval::UnitInterval;

/// A trait for enforcing a numeric invariant at construction time.
///
/// Implement this for a marker type representing the invariant, such as
/// [`StrictlyPositive`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the
    /// constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value proven to satisfy the constraint `C` when it was constructed.
///
/// Combine this with one of the provided marker types (such as
/// [`StrictlyPositive`]) or a custom [`Constraint<T>`] implementation.
///
/// # Example
///
/// ```
/// use fuzzbound_core::constraint::{Constrained, StrictlyPositive};
///
/// let sigma = Constrained::<_, StrictlyPositive>::new(1.5).unwrap();
/// assert_eq!(sigma.into_inner(), 1.5);
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

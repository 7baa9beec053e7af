//! The three parametric membership families.
//!
//! Each family is a small immutable value type implementing
//! [`Membership`](fuzzbound_core::Membership), with a fallible constructor
//! that enforces the family's shape-parameter invariants up front. Evaluation
//! never re-validates.

mod bell;
mod gaussian;
mod triangular;

use fuzzbound_core::constraint::ConstraintError;
use thiserror::Error;

pub use bell::Bell;
pub use gaussian::Gaussian;
pub use triangular::Triangular;

/// An error from constructing a membership-family member with invalid
/// shape parameters.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum ParameterError {
    /// Triangular parameters must be ordered.
    #[error("triangular parameters must satisfy a <= b <= c (got a={a}, b={b}, c={c})")]
    Unordered { a: f64, b: f64, c: f64 },

    /// A parameter violated a numeric constraint, such as a non-positive
    /// Gaussian sigma or bell width.
    #[error(transparent)]
    Constraint(#[from] ConstraintError),
}

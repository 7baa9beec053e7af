//! Forward and inverse upper/lower approximation operators for propagating a
//! sampled function through a fuzzy-set extension-principle transform.
//!
//! The forward direction takes a [`SampleSeries`] (observed `(x, f(x))`
//! pairs) and a [`ParameterSet`] of fuzzy-set family members and produces one
//! upper and one lower bound per member (a [`BoundArray`] each). The inverse
//! direction reconstructs a pointwise estimate of the function at any new
//! input from those bounds and the same parameter set.
//!
//! Three membership families are provided — [`Triangular`], [`Gaussian`],
//! and [`Bell`] — but the operators themselves are generic over anything
//! implementing [`fuzzbound_core::Membership`].
//!
//! ```
//! use fuzzbound_transform::{
//!     forward_lower, forward_upper, inverse_lower, inverse_upper,
//!     ParameterSet, SampleSeries, Triangular,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let params = ParameterSet::new(vec![
//!     Triangular::new(0.0, 1.0, 2.0)?,
//!     Triangular::new(1.0, 2.0, 3.0)?,
//! ])?;
//! let samples = SampleSeries::from_pairs([(0.5, 1.0), (1.5, 3.0), (2.5, 2.0)])?;
//!
//! let upper = forward_upper(&params, &samples);
//! let lower = forward_lower(&params, &samples);
//!
//! let estimate_up = inverse_upper(1.5, &upper, &params)?;
//! let estimate_down = inverse_lower(1.5, &lower, &params)?;
//! assert!(estimate_down <= estimate_up);
//! # Ok(())
//! # }
//! ```

mod bound;
mod error;
pub mod membership;
mod series;
mod set;
pub mod transform;

pub use bound::BoundArray;
pub use error::TransformError;
pub use membership::{Bell, Gaussian, ParameterError, Triangular};
pub use series::SampleSeries;
pub use set::ParameterSet;
pub use transform::{forward_lower, forward_upper, inverse_lower, inverse_upper};

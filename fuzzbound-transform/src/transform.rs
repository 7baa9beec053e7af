//! The four upper/lower approximation operators.
//!
//! The forward direction aggregates a [`SampleSeries`] into one bound per
//! parameter-set member; the inverse direction aggregates those bounds back
//! into a pointwise estimate at a query input. Both directions are built
//! from the same two reduction shapes:
//!
//! - **sup of products** (`degree * value`): [`forward_upper`] over samples,
//!   [`inverse_lower`] over members.
//! - **inf of ratios** (`value / degree`): [`forward_lower`] over samples,
//!   [`inverse_upper`] over members.
//!
//! This pairing is the conjugate duality of the extension principle: an upper
//! bound always comes from a max-of-products, a lower bound from a
//! min-of-ratios. Whenever a ratio's membership degree is exactly zero, the
//! candidate is `f64::INFINITY` instead of a division result, so a single
//! zero-degree sample never forces an infinite bound unless every candidate
//! is infinite.

use fuzzbound_core::Membership;

use crate::{bound::BoundArray, error::TransformError, series::SampleSeries, set::ParameterSet};

/// Computes the upper bound `sup_i degree(m, x_i) * f_i` for each member.
///
/// Each entry of the result is the supremum, over the sample series, of the
/// product of membership degree and observed value: an upper envelope of the
/// extension-principle image of the samples under that member.
pub fn forward_upper<M: Membership>(
    params: &ParameterSet<M>,
    samples: &SampleSeries,
) -> BoundArray {
    params
        .iter()
        .map(|m| sup_product(samples.iter().map(|(x, f)| (m.degree(x), f))))
        .collect()
}

/// Computes the lower bound `inf_i f_i / degree(m, x_i)` for each member.
///
/// Samples where the member's degree is exactly zero contribute an
/// `f64::INFINITY` candidate instead of a ratio. The entry is therefore
/// infinite only when every sample has zero degree, meaning no finite lower
/// bound was observed for that member.
pub fn forward_lower<M: Membership>(
    params: &ParameterSet<M>,
    samples: &SampleSeries,
) -> BoundArray {
    params
        .iter()
        .map(|m| inf_ratio(samples.iter().map(|(x, f)| (m.degree(x), f))))
        .collect()
}

/// Reconstructs the upper estimate of the function at `x`:
/// `inf_m bounds[m] / degree(m, x)`, with the zero-degree sentinel rule.
///
/// `bounds` must be the output of [`forward_upper`] for the same `params`.
///
/// # Errors
///
/// Returns [`TransformError::BoundMismatch`] if `bounds` is not index-aligned
/// with `params`.
pub fn inverse_upper<M: Membership>(
    x: f64,
    bounds: &BoundArray,
    params: &ParameterSet<M>,
) -> Result<f64, TransformError> {
    check_alignment(bounds, params)?;
    Ok(inf_ratio(
        params.iter().zip(bounds.iter()).map(|(m, b)| (m.degree(x), b)),
    ))
}

/// Reconstructs the lower estimate of the function at `x`:
/// `sup_m degree(m, x) * bounds[m]`.
///
/// `bounds` must be the output of [`forward_lower`] for the same `params`.
///
/// # Errors
///
/// Returns [`TransformError::BoundMismatch`] if `bounds` is not index-aligned
/// with `params`.
pub fn inverse_lower<M: Membership>(
    x: f64,
    bounds: &BoundArray,
    params: &ParameterSet<M>,
) -> Result<f64, TransformError> {
    check_alignment(bounds, params)?;
    Ok(sup_product(
        params.iter().zip(bounds.iter()).map(|(m, b)| (m.degree(x), b)),
    ))
}

fn check_alignment<M>(bounds: &BoundArray, params: &ParameterSet<M>) -> Result<(), TransformError> {
    if bounds.len() != params.len() {
        return Err(TransformError::BoundMismatch {
            bounds: bounds.len(),
            members: params.len(),
        });
    }
    Ok(())
}

/// Max of `degree * value` over the candidates.
///
/// Callers guarantee a non-empty iterator, so the fold never returns its
/// negative-infinity seed.
fn sup_product(pairs: impl Iterator<Item = (f64, f64)>) -> f64 {
    pairs
        .map(|(degree, value)| degree * value)
        .fold(f64::NEG_INFINITY, f64::max)
}

/// Min of `value / degree` over the candidates, where a degree of exactly
/// zero contributes `f64::INFINITY` instead of a ratio.
///
/// The zero test is exact, not epsilon-tolerant: a denormally small degree
/// still divides, only a true zero triggers the sentinel.
fn inf_ratio(pairs: impl Iterator<Item = (f64, f64)>) -> f64 {
    pairs
        .map(|(degree, value)| {
            if degree > 0.0 {
                value / degree
            } else {
                f64::INFINITY
            }
        })
        .fold(f64::INFINITY, f64::min)
}

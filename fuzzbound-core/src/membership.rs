/// The evaluation contract for a fuzzy-set family member.
///
/// A `Membership` implementor maps an input value to a membership degree in
/// `[0, 1]`. Evaluation must be pure and deterministic: the same input always
/// produces the same degree, with no side effects, for every finite `x`.
///
/// Transform code is written against this trait alone, so the reduction logic
/// is shared across families; everything family-specific (the closed-form
/// degree formula and its shape parameters) lives behind `degree`.
///
/// # Example
///
/// ```
/// use fuzzbound_core::Membership;
///
/// /// A crisp interval: degree 1 inside, 0 outside.
/// struct Interval {
///     lo: f64,
///     hi: f64,
/// }
///
/// impl Membership for Interval {
///     fn degree(&self, x: f64) -> f64 {
///         if self.lo <= x && x <= self.hi { 1.0 } else { 0.0 }
///     }
/// }
///
/// let unit = Interval { lo: 0.0, hi: 1.0 };
/// assert_eq!(unit.degree(0.5), 1.0);
/// assert_eq!(unit.degree(2.0), 0.0);
/// ```
pub trait Membership {
    /// Returns the membership degree of `x`, a value in `[0, 1]`.
    fn degree(&self, x: f64) -> f64;
}

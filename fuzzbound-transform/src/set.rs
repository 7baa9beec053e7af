use crate::error::TransformError;

/// A non-empty, ordered collection of same-family fuzzy-set members.
///
/// All members share one evaluation formula (the type parameter `M`) but
/// carry distinct shape parameters — for example, a bank of triangular
/// numbers with different centers. The type parameter is what guarantees the
/// members are of the same family; mixing families is a compile error.
///
/// # Examples
///
/// ```
/// use fuzzbound_transform::{ParameterSet, Gaussian};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let params = ParameterSet::new(vec![
///     Gaussian::new(0.0, 1.0)?,
///     Gaussian::new(2.0, 1.0)?,
///     Gaussian::new(4.0, 1.0)?,
/// ])?;
/// assert_eq!(params.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet<M>(Vec<M>);

impl<M> ParameterSet<M> {
    /// Creates a parameter set from a non-empty list of members.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::EmptyParameterSet`] if `members` is empty.
    pub fn new(members: Vec<M>) -> Result<Self, TransformError> {
        if members.is_empty() {
            return Err(TransformError::EmptyParameterSet);
        }
        Ok(Self(members))
    }

    /// The number of members; always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: construction rejects empty sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The members, in construction order.
    #[must_use]
    pub fn members(&self) -> &[M] {
        &self.0
    }

    /// Iterates over the members in order.
    pub fn iter(&self) -> impl Iterator<Item = &M> {
        self.0.iter()
    }
}

use std::ops::Index;

use ndarray::Array1;

/// Per-member bounds produced by a forward transform.
///
/// Entry `m` is the upper (or lower) bound computed for member `m` of the
/// [`ParameterSet`](crate::ParameterSet) the transform was applied to; the
/// two are index-aligned. An entry may be the `f64::INFINITY` sentinel,
/// meaning no finite bound was observed for that member.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundArray(Array1<f64>);

impl BoundArray {
    /// The number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the array has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The bound values, index-aligned with the originating parameter set.
    #[must_use]
    pub fn values(&self) -> &Array1<f64> {
        &self.0
    }

    /// Iterates over the bound values in member order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }
}

impl Index<usize> for BoundArray {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<Array1<f64>> for BoundArray {
    fn from(values: Array1<f64>) -> Self {
        Self(values)
    }
}

impl From<Vec<f64>> for BoundArray {
    fn from(values: Vec<f64>) -> Self {
        Self(Array1::from_vec(values))
    }
}

impl FromIterator<f64> for BoundArray {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

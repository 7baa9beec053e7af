use ndarray::Array1;

use crate::error::TransformError;

/// An empirically sampled function: aligned `(x, f(x))` observations.
///
/// Sample `i` is the pair `(x_values[i], f_values[i])`. The two halves must
/// have the same, non-zero length; no ordering of `x_values` is assumed, and
/// none of the transform operators depend on sample order.
///
/// # Examples
///
/// ```
/// use fuzzbound_transform::SampleSeries;
/// use ndarray::array;
///
/// let samples = SampleSeries::new(array![0.0, 1.0, 2.0], array![0.0, 2.0, 0.0]).unwrap();
/// assert_eq!(samples.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSeries {
    x: Array1<f64>,
    f: Array1<f64>,
}

impl SampleSeries {
    /// Creates a sample series from aligned input and observation arrays.
    ///
    /// # Errors
    ///
    /// - [`TransformError::ShapeMismatch`] if the arrays differ in length.
    /// - [`TransformError::EmptySampleSeries`] if they are empty.
    pub fn new(x_values: Array1<f64>, f_values: Array1<f64>) -> Result<Self, TransformError> {
        if x_values.len() != f_values.len() {
            return Err(TransformError::ShapeMismatch {
                x_len: x_values.len(),
                f_len: f_values.len(),
            });
        }
        if x_values.is_empty() {
            return Err(TransformError::EmptySampleSeries);
        }
        Ok(Self {
            x: x_values,
            f: f_values,
        })
    }

    /// Creates a sample series from `(x, f(x))` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::EmptySampleSeries`] if the iterator yields
    /// no pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (f64, f64)>) -> Result<Self, TransformError> {
        let (x, f): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();
        Self::new(Array1::from_vec(x), Array1::from_vec(f))
    }

    /// The number of samples; always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Always false: construction rejects empty series.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// The sampled inputs.
    #[must_use]
    pub fn x_values(&self) -> &Array1<f64> {
        &self.x
    }

    /// The observed outputs, aligned with [`x_values`](Self::x_values).
    #[must_use]
    pub fn f_values(&self) -> &Array1<f64> {
        &self.f
    }

    /// Iterates over the aligned `(x, f(x))` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.f.iter().copied())
    }
}

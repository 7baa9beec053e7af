use thiserror::Error;

/// An error from constructing transform inputs or applying an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TransformError {
    /// The two halves of a sample series have different lengths.
    #[error("sample series shape mismatch: {x_len} x values vs {f_len} f values")]
    ShapeMismatch { x_len: usize, f_len: usize },

    /// A bound array is not index-aligned with the parameter set it is
    /// evaluated against.
    #[error("bound array has {bounds} entries but parameter set has {members} members")]
    BoundMismatch { bounds: usize, members: usize },

    /// A sample series must contain at least one sample.
    #[error("sample series is empty")]
    EmptySampleSeries,

    /// A parameter set must contain at least one member.
    #[error("parameter set is empty")]
    EmptyParameterSet,
}

use thiserror::Error;

/// Errors that can come out of [`Packer::pack`](struct.Packer.html#method.pack).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PackError {
    /// A footprint had a width or length that was zero, negative, infinite or
    /// NaN.
    #[error("object {index} has an invalid footprint of {width} x {length}")]
    InvalidFootprint {
        index: usize,
        width: f64,
        length: f64,
    },

    #[error("spacing between objects must be finite and non-negative, got {0}")]
    InvalidSpacing(f64),

    #[error("minimum bin size must be finite and non-negative, got {0} x {1}")]
    InvalidSeed(f64, f64),

    /// Growing the bin did not produce room for an object.
    #[error("could not grow the bin to fit object {index} ({width} x {length})")]
    Unpackable {
        index: usize,
        width: f64,
        length: f64,
    },
}

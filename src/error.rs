use thiserror::Error;

/// Errors raised while assembling a network or firing it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NetworkError {
    /// A topology parameter or weight matrix shape violates the layer rules.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// The input vector handed to `fire` does not match the input layer.
    #[error("input length {actual} does not match the configured input count {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
}

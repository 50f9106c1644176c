use ark_std::string::String;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MatrixError {
    /// Fail due to an operation on matrices of incompatible dimensions.
    #[error("Incompatible matrix dimensions: {0}x{1} and {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),
    /// Fail due to a record stream violating the expected structure.
    /// Produced by loaders, never by the arithmetic core.
    #[error("Malformed matrix input: {0}")]
    MalformedInput(String),
}

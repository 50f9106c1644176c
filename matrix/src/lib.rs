#![cfg_attr(not(feature = "std"), no_std)]

mod error;
pub mod ops;
pub mod sparse_matrix;

pub use error::MatrixError;
pub use ops::Transpose;
pub use sparse_matrix::SparseMatrix;

//! Text record loader/writer for [`spmat::SparseMatrix`].
//!
//! The record stream declares the dimensions first, then one parenthesized
//! triple per non-zero entry:
//!
//! ```text
//! rows=3
//! cols=3
//! (0, 1, 2)
//! (2, 0, 1)
//! ```
//!
//! Structural violations surface as [`spmat::MatrixError::MalformedInput`];
//! the arithmetic core never produces that error kind itself.

mod loader;
mod writer;

pub use loader::{load_from_file, parse_str};
pub use writer::{save_to_file, write_str};

use spmat::{MatrixError, SparseMatrix};
use std::{fmt::Display, fs, path::Path};

/// Render a matrix into the record format read by [`crate::parse_str`]:
/// the two dimension headers, then one `(row, col, value)` line per stored
/// entry in canonical order. No trailing newline.
pub fn write_str<R: Display>(matrix: &SparseMatrix<R>) -> String {
    let mut out = format!("rows={}\ncols={}", matrix.nrows(), matrix.ncols());
    for (&(row, col), value) in matrix.iter() {
        out.push_str(&format!("\n({row}, {col}, {value})"));
    }
    out
}

/// Write the rendered record stream to `path`, newline-terminated.
pub fn save_to_file<R, P>(matrix: &SparseMatrix<R>, path: P) -> Result<(), MatrixError>
where
    R: Display,
    P: AsRef<Path>,
{
    let mut content = write_str(matrix);
    content.push('\n');
    fs::write(path.as_ref(), content).map_err(|e| {
        MatrixError::MalformedInput(format!("cannot write {}: {e}", path.as_ref().display()))
    })
}

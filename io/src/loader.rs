use ark_std::Zero;
use spmat::{MatrixError, SparseMatrix};
use std::{fs, path::Path, str::FromStr};

/// Parse a record stream into a matrix.
///
/// Whitespace-only lines are skipped. The first two significant lines must
/// be the `rows=` and `cols=` headers, in that order; every further line is
/// an entry triple. Entries are applied in stream order, so a repeated
/// position keeps its last value and a zero value clears the position.
pub fn parse_str<R>(input: &str) -> Result<SparseMatrix<R>, MatrixError>
where
    R: Zero + FromStr,
{
    let mut lines = input.lines().map(str::trim).filter(|line| !line.is_empty());

    let nrows = parse_header(lines.next(), "rows")?;
    let ncols = parse_header(lines.next(), "cols")?;

    let mut matrix = SparseMatrix::new(nrows, ncols);
    for line in lines {
        let (row, col, value) = parse_entry(line)?;
        matrix.set(row, col, value);
    }
    Ok(matrix)
}

/// Read `path` and parse its contents. Unreadable files report as
/// [`MatrixError::MalformedInput`], like any other rejected input.
pub fn load_from_file<R, P>(path: P) -> Result<SparseMatrix<R>, MatrixError>
where
    R: Zero + FromStr,
    P: AsRef<Path>,
{
    let content = fs::read_to_string(path.as_ref())
        .map_err(|e| malformed(format!("cannot read {}: {e}", path.as_ref().display())))?;
    parse_str(&content)
}

fn parse_header(line: Option<&str>, key: &str) -> Result<usize, MatrixError> {
    let line = line.ok_or_else(|| malformed(format!("missing {key}= header")))?;
    let value = line
        .strip_prefix(key)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or_else(|| malformed(format!("expected {key}= header, found {line:?}")))?;
    value
        .trim()
        .parse()
        .map_err(|_| malformed(format!("invalid {key} count {value:?}")))
}

fn parse_entry<R: FromStr>(line: &str) -> Result<(usize, usize, R), MatrixError> {
    let inner = line
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| malformed(format!("entry is not parenthesized: {line:?}")))?;

    let fields = inner.split(',').map(str::trim).collect::<Vec<_>>();
    let &[row, col, value] = fields.as_slice() else {
        return Err(malformed(format!(
            "expected 3 fields in entry {line:?}, found {}",
            fields.len()
        )));
    };

    Ok((
        parse_index(row, line)?,
        parse_index(col, line)?,
        value
            .parse()
            .map_err(|_| malformed(format!("invalid value in entry {line:?}")))?,
    ))
}

fn parse_index(field: &str, line: &str) -> Result<usize, MatrixError> {
    field
        .parse()
        .map_err(|_| malformed(format!("invalid index in entry {line:?}")))
}

fn malformed(msg: String) -> MatrixError {
    MatrixError::MalformedInput(msg)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "rows=3\ncols=4\n(0, 1, 2)\n(2, 0, -1)\n(2, 3, 5)";

    fn assert_malformed(result: Result<SparseMatrix<i64>, MatrixError>) {
        assert!(matches!(result, Err(MatrixError::MalformedInput(_))));
    }

    #[test]
    fn test_parse_sample() {
        let m: SparseMatrix<i64> = parse_str(SAMPLE).unwrap();

        assert_eq!(m.dims(), (3, 4));
        assert_eq!(m.to_entries(), vec![(0, 1, 2), (2, 0, -1), (2, 3, 5)]);
    }

    #[test]
    fn test_parse_tolerates_blank_lines_and_padding() {
        let input = "\n  rows=2\n\ncols=2\n\n  ( 1 , 1 , 7 )  \n\n";
        let m: SparseMatrix<i64> = parse_str(input).unwrap();

        assert_eq!(m.dims(), (2, 2));
        assert_eq!(m.get(1, 1), 7);
    }

    #[test]
    fn test_parse_empty_matrix() {
        let m: SparseMatrix<i64> = parse_str("rows=5\ncols=6").unwrap();

        assert_eq!(m.dims(), (5, 6));
        assert_eq!(m.nnz(), 0);
    }

    #[test]
    fn test_parse_repeated_and_zero_entries() {
        let input = "rows=2\ncols=2\n(0, 0, 4)\n(0, 0, 9)\n(1, 1, 3)\n(1, 1, 0)";
        let m: SparseMatrix<i64> = parse_str(input).unwrap();

        assert_eq!(m.get(0, 0), 9);
        assert_eq!(m.get(1, 1), 0);
        assert_eq!(m.nnz(), 1);
    }

    #[test]
    fn test_parse_rejects_missing_headers() {
        assert_malformed(parse_str(""));
        assert_malformed(parse_str("rows=3"));
        // Headers out of order.
        assert_malformed(parse_str("cols=3\nrows=3"));
        // Wrong header token.
        assert_malformed(parse_str("rows: 3\ncols: 3"));
        assert_malformed(parse_str("rows=x\ncols=3"));
        // Negative dimensions are not representable.
        assert_malformed(parse_str("rows=-1\ncols=3"));
    }

    #[test]
    fn test_parse_rejects_malformed_entries() {
        assert_malformed(parse_str("rows=2\ncols=2\n0, 0, 1"));
        assert_malformed(parse_str("rows=2\ncols=2\n(0, 1)"));
        assert_malformed(parse_str("rows=2\ncols=2\n(0, 1, 2, 3)"));
        assert_malformed(parse_str("rows=2\ncols=2\n(a, 1, 2)"));
        assert_malformed(parse_str("rows=2\ncols=2\n(-1, 1, 2)"));
        // Fractional values are rejected, not truncated.
        assert_malformed(parse_str("rows=2\ncols=2\n(0, 1, 2.5)"));
    }

    #[test]
    fn test_load_missing_file_is_malformed_input() {
        let result: Result<SparseMatrix<i64>, _> = load_from_file("/nonexistent/matrix.txt");
        assert_malformed(result);
    }
}

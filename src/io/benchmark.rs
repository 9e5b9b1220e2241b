//! Plain-text benchmark loader.
//!
//! # Format
//!
//! ```text
//! n k [optimum]
//! u_1
//! ...
//! u_n
//! c_11 ... c_1n      (one row per dimension)
//! ...
//! c_k1 ... c_kn
//! B_1 ... B_k
//! ```
//!
//! The optional third header token (the known optimum carried by
//! Drake-format benchmark files) is accepted and ignored. A missing file
//! surfaces as [`LoadError::Io`]; wrong token counts, non-numeric fields,
//! and truncation surface as [`LoadError::Malformed`] with the offending
//! line number. No partial instance is ever returned.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::error::LoadError;
use crate::problem::{Instance, Item};

/// Loads a benchmark file from disk.
pub fn load<P: AsRef<Path>>(path: P) -> Result<Instance, LoadError> {
    let file = File::open(path)?;
    parse(BufReader::new(file))
}

/// Parses benchmark text from any buffered reader.
pub fn parse<R: BufRead>(reader: R) -> Result<Instance, LoadError> {
    let mut lines = Lines::new(reader);

    let (line_no, header) = lines.next_line()?;
    let header: Vec<&str> = header.split_whitespace().collect();
    if header.len() < 2 {
        return Err(malformed(line_no, "expected item count and dimension"));
    }
    let num_items: usize = parse_token(line_no, header[0], "item count")?;
    let dimension: usize = parse_token(line_no, header[1], "dimension")?;

    let mut utilities = Vec::with_capacity(num_items);
    for _ in 0..num_items {
        let (line_no, line) = lines.next_line()?;
        let utility: u32 = parse_token(line_no, line.trim(), "utility")?;
        utilities.push(utility);
    }

    // Cost matrix arrives row-per-dimension; items own their cost columns.
    let mut cost_rows = Vec::with_capacity(dimension);
    for _ in 0..dimension {
        let (line_no, line) = lines.next_line()?;
        let row = parse_row::<u32>(line_no, &line, num_items, "cost")?;
        cost_rows.push(row);
    }

    let (line_no, line) = lines.next_line()?;
    let budgets = parse_row::<u32>(line_no, &line, dimension, "budget")?;

    let items = (0..num_items)
        .map(|i| {
            let costs = cost_rows.iter().map(|row| row[i]).collect();
            Item::new(utilities[i], costs)
        })
        .collect();

    Instance::new(dimension, budgets, items).map_err(|e| malformed(1, &e.to_string()))
}

/// Line reader that tracks line numbers and reports truncation.
struct Lines<R> {
    reader: R,
    line_no: usize,
}

impl<R: BufRead> Lines<R> {
    fn new(reader: R) -> Self {
        Self { reader, line_no: 0 }
    }

    fn next_line(&mut self) -> Result<(usize, String), LoadError> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        self.line_no += 1;
        if read == 0 {
            return Err(malformed(self.line_no, "unexpected end of file"));
        }
        Ok((self.line_no, line))
    }
}

fn malformed(line: usize, reason: &str) -> LoadError {
    LoadError::Malformed {
        line,
        reason: reason.to_string(),
    }
}

fn parse_token<T: FromStr>(line_no: usize, token: &str, what: &str) -> Result<T, LoadError> {
    token
        .parse()
        .map_err(|_| malformed(line_no, &format!("invalid {what} value {token:?}")))
}

fn parse_row<T: FromStr>(
    line_no: usize,
    line: &str,
    expected: usize,
    what: &str,
) -> Result<Vec<T>, LoadError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != expected {
        return Err(malformed(
            line_no,
            &format!("expected {expected} {what} values, found {}", tokens.len()),
        ));
    }
    tokens
        .into_iter()
        .map(|token| parse_token(line_no, token, what))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const VALID: &str = "\
3 2
10
8
5
4 3 10
3 3 10
7 7
";

    #[test]
    fn test_parse_valid_file() {
        let instance = parse(Cursor::new(VALID)).unwrap();

        assert_eq!(instance.dimension(), 2);
        assert_eq!(instance.budgets(), &[7, 7]);
        assert_eq!(instance.num_items(), 3);
        assert_eq!(instance.items()[0].utility(), 10);
        assert_eq!(instance.items()[0].costs(), &[4, 3]);
        assert_eq!(instance.items()[2].costs(), &[10, 10]);
    }

    #[test]
    fn test_parse_ignores_optimum_header_token() {
        let text = "1 1 42\n5\n2\n9\n";
        let instance = parse(Cursor::new(text)).unwrap();

        assert_eq!(instance.num_items(), 1);
        assert_eq!(instance.budgets(), &[9]);
    }

    #[test]
    fn test_parse_rejects_short_header() {
        let err = parse(Cursor::new("3\n")).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { line: 1, .. }));
    }

    #[test]
    fn test_parse_rejects_non_numeric_utility() {
        let text = "1 1\nabc\n2\n9\n";
        let err = parse(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { line: 2, .. }));
    }

    #[test]
    fn test_parse_rejects_negative_cost() {
        let text = "1 1\n5\n-2\n9\n";
        let err = parse(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { line: 3, .. }));
    }

    #[test]
    fn test_parse_rejects_wrong_cost_row_width() {
        let text = "2 1\n5\n6\n1 2 3\n9\n";
        let err = parse(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { line: 4, .. }));
    }

    #[test]
    fn test_parse_rejects_truncated_file() {
        let text = "3 2\n10\n8\n";
        let err = parse(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn test_parse_rejects_zero_dimension() {
        let text = "1 0\n5\n\n";
        let err = parse(Cursor::new(text)).unwrap_err();
        assert!(matches!(err, LoadError::Malformed { .. }));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load("definitely/not/a/real/benchmark.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_loaded_instance_is_solvable() {
        use crate::greedy::GreedyAdd;
        use crate::scoring::SumRatio;

        let instance = parse(Cursor::new(VALID)).unwrap();
        let selection = GreedyAdd::run(&instance, &SumRatio);

        assert!(instance.is_admissible(&selection));
        assert_eq!(instance.total_utility(&selection), 18);
    }
}

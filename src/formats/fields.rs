//! Field-level parsing helpers.
//!
//! Small utilities shared by the reader and the VCF layer: parsing genomic
//! coordinates out of field text, and parsing comma-separated coordinate
//! lists (multi-valued INFO entries).

use crate::error::{DelimError, Result};

/// Parses a genomic coordinate from field text.
///
/// Accepts an optional leading `+` or `-` followed by ASCII digits. Anything
/// else (empty text, embedded whitespace, floats) is rejected.
///
/// # Errors
///
/// Returns [`DelimError::InvalidCoord`] naming `line` if the text does not
/// parse.
///
/// # Examples
///
/// ```
/// use delimstream::formats::fields::parse_coord;
///
/// assert_eq!(parse_coord("12345", 1)?, 12345);
/// assert_eq!(parse_coord("-50", 1)?, -50);
/// assert!(parse_coord("12.5", 1).is_err());
/// # Ok::<(), delimstream::DelimError>(())
/// ```
pub fn parse_coord(text: &str, line: usize) -> Result<i64> {
    text.parse::<i64>().map_err(|_| DelimError::InvalidCoord {
        text: text.to_string(),
        line,
    })
}

/// Parses a comma-separated list of coordinates.
///
/// Empty tokens (from leading, trailing, or doubled commas) are skipped
/// rather than rejected, so `"100,"` yields `[100]`.
///
/// # Errors
///
/// Returns [`DelimError::InvalidCoord`] on the first non-empty token that
/// does not parse.
pub fn parse_comma_coords(text: &str, line: usize) -> Result<Vec<i64>> {
    text.split(',')
        .filter(|tok| !tok.is_empty())
        .map(|tok| parse_coord(tok, line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_coordinates() {
        assert_eq!(parse_coord("0", 1).unwrap(), 0);
        assert_eq!(parse_coord("248956422", 1).unwrap(), 248956422);
        assert_eq!(parse_coord("-100", 1).unwrap(), -100);
        assert_eq!(parse_coord("+7", 1).unwrap(), 7);
    }

    #[test]
    fn rejects_malformed_coordinates() {
        for bad in ["", "12.5", "1e6", "12 34", "chr1", "--5"] {
            let err = parse_coord(bad, 42).unwrap_err();
            match err {
                DelimError::InvalidCoord { text, line } => {
                    assert_eq!(text, bad);
                    assert_eq!(line, 42);
                }
                other => panic!("unexpected error: {other:?}"),
            }
        }
    }

    #[test]
    fn parses_comma_lists() {
        assert_eq!(parse_comma_coords("-50,30,-10", 1).unwrap(), vec![-50, 30, -10]);
        assert_eq!(parse_comma_coords("100", 1).unwrap(), vec![100]);
        // empty tokens skipped
        assert_eq!(parse_comma_coords("100,", 1).unwrap(), vec![100]);
        assert_eq!(parse_comma_coords(",", 1).unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn comma_list_propagates_parse_errors() {
        assert!(parse_comma_coords("100,x,300", 5).is_err());
    }
}

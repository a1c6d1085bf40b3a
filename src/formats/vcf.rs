//! VCF structural-variant length derivation.
//!
//! VCF encodes structural variants in the INFO column as semicolon-separated
//! `key=value` subfields. Two keys can describe a variant's length:
//!
//! - `SVLEN`: the length directly, possibly one value per alternate allele
//!   (comma-separated), deletions negative.
//! - `END`: the end coordinate; length is then `END - POS + 1`.
//!
//! [`DelimTextReader::sv_length`] derives the length from whichever key
//! appears first in subfield order, with `SVLEN` taking priority when it is
//! encountered before `END`. When neither is present the
//! [`SV_LEN_NOT_FOUND`] sentinel is returned.
//!
//! # Examples
//!
//! ```
//! use delimstream::DelimTextReader;
//! use std::io::Cursor;
//!
//! let line = "chr1\t100\tsv1\tN\t<DEL>\t.\tPASS\tFOO=BAR;SVLEN=-300\tGT\t0/1\n";
//! let mut reader = DelimTextReader::from_reader(Cursor::new(line), 10, b'\t');
//!
//! assert!(reader.read_entry()?);
//! assert_eq!(reader.sv_length()?, 300);
//! # Ok::<(), delimstream::DelimError>(())
//! ```

use crate::error::Result;
use crate::formats::delimited::DelimTextReader;
use crate::formats::fields::{parse_comma_coords, parse_coord};
use crate::io::LineSource;

/// Field index of the INFO column in a VCF record.
pub const VCF_INFO_FIELD: usize = 7;

/// Field index of the POS column in a VCF record.
pub const VCF_POS_FIELD: usize = 1;

/// Sentinel returned when no length could be derived from the INFO column.
///
/// Callers must treat this as "no derivable length," never as a numeric
/// answer.
pub const SV_LEN_NOT_FOUND: i64 = i64::MIN;

impl<S: LineSource> DelimTextReader<S> {
    /// Derives the structural-variant length of the current VCF record.
    ///
    /// Must follow a `read_entry` call that returned `Ok(true)` on a reader
    /// configured for VCF (INFO at field 7); does not advance the reader.
    ///
    /// Subfields of INFO are examined in order:
    /// - a literal `.` placeholder is skipped;
    /// - subfields that do not split into exactly `key=value` are ignored;
    /// - `SVLEN` returns immediately: the absolute value of the single
    ///   length, or, for a multi-valued list, the absolute value of the
    ///   maximum of the signed list. The signed maximum is taken first and
    ///   the absolute value applied to it afterwards, so `-50,30,-10`
    ///   yields `30` before `abs`, not `50`;
    /// - `END` returns `END - POS + 1` immediately;
    /// - if neither key matched, [`SV_LEN_NOT_FOUND`] is returned.
    ///
    /// # Errors
    ///
    /// [`crate::DelimError::InvalidCoord`] if a matched `SVLEN`/`END` value
    /// (or the POS field) is not numeric. Malformed subfields that never
    /// match a key are skipped without error.
    pub fn sv_length(&self) -> Result<i64> {
        let info = self.field(VCF_INFO_FIELD);
        for subfield in info.split(';') {
            if subfield == "." {
                continue;
            }
            let parts: Vec<&str> = subfield.split('=').filter(|p| !p.is_empty()).collect();
            if parts.len() != 2 {
                continue;
            }
            match parts[0] {
                "SVLEN" => {
                    let lens = parse_comma_coords(parts[1], self.line_number())?;
                    match lens.as_slice() {
                        [] => continue,
                        [only] => return Ok(only.abs()),
                        many => {
                            // Signed max first, then abs. Looks like it may
                            // have been meant as max-of-abs, but this is the
                            // behavior downstream tools depend on.
                            let max = *many.iter().max().unwrap();
                            return Ok(max.abs());
                        }
                    }
                }
                "END" => {
                    let end = parse_coord(parts[1], self.line_number())?;
                    let pos = self.field_coord(VCF_POS_FIELD)?;
                    return Ok(end - pos + 1);
                }
                _ => {}
            }
        }
        Ok(SV_LEN_NOT_FOUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DelimError;
    use std::io::Cursor;

    /// Builds a one-record VCF reader with the given POS and INFO text and
    /// positions it on the record.
    fn vcf_reader(pos: &str, info: &str) -> DelimTextReader<Cursor<String>> {
        let line = format!("chr1\t{pos}\tid1\tN\t<DEL>\t.\tPASS\t{info}\tGT\t0/1\n");
        let mut r = DelimTextReader::from_reader(Cursor::new(line), 10, b'\t');
        assert!(r.read_entry().unwrap());
        r
    }

    #[test]
    fn svlen_takes_priority_over_end() {
        let r = vcf_reader("100", "FOO=BAR;SVLEN=100;END=200");
        assert_eq!(r.sv_length().unwrap(), 100);
    }

    #[test]
    fn svlen_is_absolute_valued() {
        let r = vcf_reader("100", "SVLEN=-300");
        assert_eq!(r.sv_length().unwrap(), 300);
    }

    #[test]
    fn multi_valued_svlen_takes_signed_max_then_abs() {
        // max of [-50, 30, -10] is 30; abs(30) = 30. NOT max-of-abs = 50.
        let r = vcf_reader("100", "FOO=BAR;SVLEN=-50,30,-10");
        assert_eq!(r.sv_length().unwrap(), 30);
    }

    #[test]
    fn multi_valued_svlen_all_negative() {
        // max of [-50, -30, -10] is -10; abs gives 10.
        let r = vcf_reader("100", "SVLEN=-50,-30,-10");
        assert_eq!(r.sv_length().unwrap(), 10);
    }

    #[test]
    fn end_key_derives_length_from_pos() {
        let r = vcf_reader("100", "END=150");
        assert_eq!(r.sv_length().unwrap(), 51);
    }

    #[test]
    fn end_before_svlen_wins() {
        // First matching key in subfield order returns immediately.
        let r = vcf_reader("100", "END=150;SVLEN=999");
        assert_eq!(r.sv_length().unwrap(), 51);
    }

    #[test]
    fn placeholder_info_yields_sentinel() {
        let r = vcf_reader("100", ".");
        assert_eq!(r.sv_length().unwrap(), SV_LEN_NOT_FOUND);
    }

    #[test]
    fn no_matching_keys_yields_sentinel() {
        let r = vcf_reader("100", "DP=50;AF=0.25;DB");
        assert_eq!(r.sv_length().unwrap(), SV_LEN_NOT_FOUND);
    }

    #[test]
    fn malformed_subfields_are_ignored() {
        // Flags, doubled '=', and empty values never match a key.
        let r = vcf_reader("100", "DB;A=B=C;SVLEN=;END=150");
        assert_eq!(r.sv_length().unwrap(), 51);
    }

    #[test]
    fn non_numeric_svlen_value_errors() {
        let r = vcf_reader("100", "SVLEN=big");
        assert!(matches!(
            r.sv_length(),
            Err(DelimError::InvalidCoord { .. })
        ));
    }

    #[test]
    fn non_numeric_end_value_errors() {
        let r = vcf_reader("100", "END=tail");
        assert!(r.sv_length().is_err());
    }
}

//! Streaming reader for single-character-delimited tabular text.
//!
//! This is the workhorse for line-oriented formats like BED and VCF: one
//! record per line, fields separated by a single delimiter character, an
//! optional comment/header block at the top. The reader enforces a fixed
//! field-count contract, indexes delimiter positions as it scans, and hands
//! out fields as zero-copy slices of its internal line buffer.
//!
//! # Design
//!
//! - **One record buffered at a time.** `read_entry` overwrites the line
//!   buffer; field slices borrow from it, so the borrow checker rejects any
//!   attempt to hold a field across reads. Copy out what you need to keep.
//! - **Header accumulation is one-way.** The contiguous header block at the
//!   start of the stream is collected into [`DelimTextReader::header`]. Once
//!   the first data line is accepted, later header-shaped lines are treated
//!   as commented-out records: skipped, never appended.
//! - **Field-count mismatch is fatal by policy.** A data line with the wrong
//!   number of fields yields [`DelimError::FieldCount`]; there is no skip-
//!   and-continue path.
//!
//! # Examples
//!
//! ```
//! use delimstream::DelimTextReader;
//! use std::io::Cursor;
//!
//! let data = "#chrom\tstart\tend\nchr1\t100\t200\nchr2\t300\t400\n";
//! let mut reader = DelimTextReader::from_reader(Cursor::new(data), 3, b'\t');
//!
//! assert!(reader.read_entry()?);
//! assert_eq!(reader.field(0), "chr1");
//! assert_eq!(reader.field_coord(1)?, 100);
//! assert_eq!(reader.header(), "#chrom\tstart\tend\n");
//!
//! assert!(reader.read_entry()?);
//! assert_eq!(reader.field(0), "chr2");
//!
//! assert!(!reader.read_entry()?); // EOF
//! # Ok::<(), delimstream::DelimError>(())
//! ```

use crate::error::{DelimError, Result};
use crate::formats::fields::parse_coord;
use crate::io::LineSource;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Where the reader is relative to the initial header block.
///
/// The transition is one-way: once a data line has been accepted the reader
/// never re-enters header accumulation, no matter what later lines look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderState {
    /// No data line accepted yet; header-classified lines are accumulated.
    AwaitingFirstData,
    /// First data line accepted; header-shaped lines are skipped silently.
    DataStreamActive,
}

/// Predicate deciding whether a line belongs to the header/comment block.
pub type HeaderMatcher = fn(&str) -> bool;

/// Default header matcher: lines starting with `#`.
pub fn hash_comment(line: &str) -> bool {
    line.starts_with('#')
}

/// Streaming reader over single-character-delimited records.
///
/// Constructed with a fixed field count and delimiter; every data line must
/// split into exactly `field_count` fields or reading fails with
/// [`DelimError::FieldCount`].
///
/// Field accessors are only valid after a `read_entry` call that returned
/// `Ok(true)`; they panic otherwise.
pub struct DelimTextReader<S: LineSource> {
    source: S,
    field_count: usize,
    delimiter: u8,
    line: String,
    /// `-1` sentinel, one offset per delimiter, then the line length.
    delim_positions: Vec<isize>,
    header: String,
    header_state: HeaderState,
    line_number: usize,
    filename: String,
    first_line_is_header: bool,
    is_header: HeaderMatcher,
}

impl<S: LineSource> DelimTextReader<S> {
    /// Creates a reader over any [`LineSource`] (every `BufRead` qualifies).
    ///
    /// `field_count` is the exact number of fields every data line must
    /// have; `delimiter` is the single separating byte (e.g. `b'\t'`).
    pub fn from_reader(source: S, field_count: usize, delimiter: u8) -> Self {
        DelimTextReader {
            source,
            field_count,
            delimiter,
            line: String::with_capacity(1024),
            delim_positions: Vec::with_capacity(field_count + 1),
            header: String::new(),
            header_state: HeaderState::AwaitingFirstData,
            line_number: 0,
            filename: String::new(),
            first_line_is_header: false,
            is_header: hash_comment,
        }
    }

    /// Sets the filename used in diagnostics.
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Replaces the header predicate (default: lines starting with `#`).
    pub fn with_header_matcher(mut self, matcher: HeaderMatcher) -> Self {
        self.is_header = matcher;
        self
    }

    /// Forces line 1 to be treated as a header regardless of the predicate.
    ///
    /// Some formats carry a column-name row that the predicate cannot
    /// recognize by content alone.
    pub fn with_first_line_header(mut self, yes: bool) -> Self {
        self.first_line_is_header = yes;
        self
    }

    /// Reads the next record, skipping and accumulating header lines.
    ///
    /// Returns `Ok(true)` when a data line was accepted and indexed, and
    /// `Ok(false)` when no record could be produced: end of stream, an
    /// empty line, or a whitespace-only line. Callers must not touch the
    /// field accessors after anything but `Ok(true)`.
    ///
    /// # Errors
    ///
    /// [`DelimError::FieldCount`] if the data line does not split into
    /// exactly the configured number of fields (unrecoverable input
    /// corruption by policy), or [`DelimError::Io`] if the source fails.
    pub fn read_entry(&mut self) -> Result<bool> {
        if self.source.eof()? {
            return Ok(false);
        }
        if !self.source.read_line_into(&mut self.line)? {
            return Ok(false);
        }
        self.line_number += 1;
        if self.line.is_empty() {
            return Ok(false);
        }

        while self.classify_header() {
            if !self.source.read_line_into(&mut self.line)? {
                return Ok(false);
            }
            self.line_number += 1;
        }
        // One-way transition: from here on, header-shaped lines are
        // commented-out records and never reach the accumulator.
        self.header_state = HeaderState::DataStreamActive;

        if !self.line.bytes().any(|b| !b.is_ascii_whitespace()) {
            return Ok(false);
        }
        while self
            .line
            .as_bytes()
            .last()
            .map_or(false, |b| b.is_ascii_whitespace())
        {
            self.line.pop();
        }

        self.locate_fields()?;
        Ok(true)
    }

    /// Classifies the current line, accumulating it if still in the header
    /// block. Returns true if the line should be skipped as a header.
    fn classify_header(&mut self) -> bool {
        let header = (self.is_header)(&self.line)
            || (self.first_line_is_header && self.line_number == 1);
        if !header {
            return false;
        }
        if self.header_state == HeaderState::AwaitingFirstData {
            self.header.push_str(&self.line);
            self.header.push('\n'); // restore the newline the source stripped
        }
        true
    }

    /// Scans the trimmed line for delimiter offsets and checks the
    /// field-count contract.
    fn locate_fields(&mut self) -> Result<()> {
        self.delim_positions.clear();
        self.delim_positions.push(-1);
        for (i, b) in self.line.bytes().enumerate() {
            if b == self.delimiter {
                self.delim_positions.push(i as isize);
            }
        }
        self.delim_positions.push(self.line.len() as isize);

        let actual = self.delim_positions.len() - 1;
        if actual != self.field_count {
            return Err(DelimError::FieldCount {
                line: self.line_number,
                filename: self.filename.clone(),
                actual,
                expected: self.field_count,
            });
        }
        Ok(())
    }

    /// Returns field `idx` of the current record as a slice of the line
    /// buffer, delimiters excluded.
    ///
    /// The slice is invalidated by the next `read_entry` call; copy it out
    /// if it must survive. `idx` must be below the configured field count.
    ///
    /// # Panics
    ///
    /// Panics if no record is current or `idx >= field_count`.
    pub fn field(&self, idx: usize) -> &str {
        debug_assert!(idx < self.field_count, "field index out of range");
        let start = (self.delim_positions[idx] + 1) as usize;
        let end = self.delim_positions[idx + 1] as usize;
        &self.line[start..end]
    }

    /// Returns field `idx` parsed as a genomic coordinate.
    ///
    /// # Errors
    ///
    /// [`DelimError::InvalidCoord`] if the field is not an integer.
    pub fn field_coord(&self, idx: usize) -> Result<i64> {
        parse_coord(self.field(idx), self.line_number)
    }

    /// Returns the first byte of field `idx`.
    ///
    /// The caller is responsible for knowing the field is one byte wide
    /// (strand columns and the like).
    pub fn field_char(&self, idx: usize) -> u8 {
        debug_assert!(idx < self.field_count, "field index out of range");
        self.line.as_bytes()[(self.delim_positions[idx] + 1) as usize]
    }

    /// Appends field `idx` onto `dest` without an intermediate allocation.
    ///
    /// Useful for building composite keys out of several fields.
    pub fn append_field(&self, idx: usize, dest: &mut String) {
        dest.push_str(self.field(idx));
    }

    /// Returns the accumulated header block, each line newline-suffixed.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Returns where the reader is relative to the initial header block.
    pub fn header_state(&self) -> HeaderState {
        self.header_state
    }

    /// Returns the number of physical lines pulled so far (1-based once
    /// reading has started; header lines count).
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns the filename used in diagnostics (empty if unset).
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Returns the configured field count.
    pub fn field_count(&self) -> usize {
        self.field_count
    }

    /// Returns the configured delimiter byte.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }
}

impl DelimTextReader<BufReader<File>> {
    /// Creates a reader over a plain-text file.
    ///
    /// The path is recorded as the diagnostic filename.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn from_path(
        path: impl AsRef<Path>,
        field_count: usize,
        delimiter: u8,
    ) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Ok(Self::from_reader(BufReader::new(file), field_count, delimiter)
            .with_filename(path.display().to_string()))
    }
}

impl DelimTextReader<BufReader<MultiGzDecoder<File>>> {
    /// Creates a reader over a gzip/bgzip-compressed file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn from_gzip_path(
        path: impl AsRef<Path>,
        field_count: usize,
        delimiter: u8,
    ) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let decoder = MultiGzDecoder::new(file);
        Ok(Self::from_reader(BufReader::new(decoder), field_count, delimiter)
            .with_filename(path.display().to_string()))
    }
}

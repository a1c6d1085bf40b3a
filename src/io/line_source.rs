//! Line-by-line input abstraction.
//!
//! [`LineSource`] is the interface the reader consumes: check for
//! end-of-stream, pull one line. A blanket implementation covers every
//! `BufRead`, so files, gzip decoders, and in-memory cursors all work
//! without adapter types.

use std::io::{self, BufRead};

/// A source of text lines for the delimited reader.
///
/// Lines are delivered without their trailing newline. Implementations are
/// synchronous; each call either completes from buffered data or performs
/// one blocking read.
///
/// # Examples
///
/// ```
/// use delimstream::io::LineSource;
/// use std::io::Cursor;
///
/// let mut source = Cursor::new("chr1\t100\nchr2\t200\n");
/// let mut buf = String::new();
///
/// assert!(source.read_line_into(&mut buf)?);
/// assert_eq!(buf, "chr1\t100");
/// # Ok::<(), std::io::Error>(())
/// ```
pub trait LineSource {
    /// Returns true if the source has no more bytes to deliver.
    ///
    /// # Errors
    ///
    /// Returns an error if probing the underlying stream fails.
    fn eof(&mut self) -> io::Result<bool>;

    /// Reads the next line into `buf`, replacing its contents.
    ///
    /// The trailing `\n` (and `\r` before it, for CRLF input) is stripped.
    /// Returns `Ok(false)` at end of stream, in which case `buf` is left
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying read fails.
    fn read_line_into(&mut self, buf: &mut String) -> io::Result<bool>;
}

impl<R: BufRead> LineSource for R {
    fn eof(&mut self) -> io::Result<bool> {
        Ok(self.fill_buf()?.is_empty())
    }

    fn read_line_into(&mut self, buf: &mut String) -> io::Result<bool> {
        buf.clear();
        let n = self.read_line(buf)?;
        if n == 0 {
            return Ok(false);
        }
        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_lines_without_newlines() {
        let mut source = Cursor::new("a\nb\nc");
        let mut buf = String::new();

        assert!(source.read_line_into(&mut buf).unwrap());
        assert_eq!(buf, "a");
        assert!(source.read_line_into(&mut buf).unwrap());
        assert_eq!(buf, "b");
        assert!(source.read_line_into(&mut buf).unwrap());
        assert_eq!(buf, "c");
        assert!(!source.read_line_into(&mut buf).unwrap());
        assert!(buf.is_empty());
    }

    #[test]
    fn strips_crlf() {
        let mut source = Cursor::new("chr1\t1\t2\r\n");
        let mut buf = String::new();

        assert!(source.read_line_into(&mut buf).unwrap());
        assert_eq!(buf, "chr1\t1\t2");
    }

    #[test]
    fn eof_reporting() {
        let mut source = Cursor::new("x\n");
        assert!(!source.eof().unwrap());

        let mut buf = String::new();
        source.read_line_into(&mut buf).unwrap();
        assert!(source.eof().unwrap());
    }

    #[test]
    fn empty_source_is_immediately_eof() {
        let mut source = Cursor::new("");
        assert!(source.eof().unwrap());

        let mut buf = String::from("stale");
        assert!(!source.read_line_into(&mut buf).unwrap());
        assert!(buf.is_empty());
    }
}

//! Error types for delimstream

use thiserror::Error;

/// Result type alias for delimstream operations
pub type Result<T> = std::result::Result<T, DelimError>;

/// Error types that can occur while reading delimited text
#[derive(Debug, Error)]
pub enum DelimError {
    /// I/O error from the underlying line source
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A data line did not split into the configured number of fields.
    ///
    /// This is unrecoverable by policy: malformed tabular input invalidates
    /// the whole run. The reader returns it like any other error so callers
    /// (and test harnesses) can intercept it; command-line frontends hand it
    /// to [`abort_on_malformed`] for the conventional stderr-and-exit path.
    #[error("line number {line} of file {filename} has {actual} fields, but {expected} were expected.")]
    FieldCount {
        /// Line number where the mismatch occurred (1-based)
        line: usize,
        /// Name of the offending file (empty for in-memory sources)
        filename: String,
        /// Number of fields actually found
        actual: usize,
        /// Number of fields the reader was configured to expect
        expected: usize,
    },

    /// A field that should hold a genomic coordinate did not parse as one
    #[error("invalid genomic coordinate '{text}' at line {line}")]
    InvalidCoord {
        /// The text that failed to parse
        text: String,
        /// Line number of the current record (1-based)
        line: usize,
    },
}

impl DelimError {
    /// Whether this error means the input stream is corrupt beyond recovery.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DelimError::FieldCount { .. })
    }
}

/// Print the conventional fatal diagnostic and terminate the process.
///
/// Writes `Error: <message>` to stderr and exits with status 1. The reader
/// itself never calls this; the decision to die belongs to the outermost
/// caller so that library users and tests can handle the error instead.
pub fn abort_on_malformed(err: &DelimError) -> ! {
    eprintln!("Error: {err}");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_count_message_shape() {
        let err = DelimError::FieldCount {
            line: 12,
            filename: "test.bed".to_string(),
            actual: 5,
            expected: 6,
        };
        assert_eq!(
            err.to_string(),
            "line number 12 of file test.bed has 5 fields, but 6 were expected."
        );
    }

    #[test]
    fn fatality_classification() {
        let mismatch = DelimError::FieldCount {
            line: 1,
            filename: String::new(),
            actual: 2,
            expected: 3,
        };
        assert!(mismatch.is_fatal());

        let io = DelimError::Io(std::io::Error::new(std::io::ErrorKind::Other, "boom"));
        assert!(!io.is_fatal());
    }
}
